//! Geometric value types
//!
//! [`Point`] carries coordinates and tolerance-based proximity;
//! [`VisualAttrs`] is the style fingerprint used as a grouping key.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 2D point in drawing coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when `other` lies within `tolerance` (inclusive).
    pub fn is_near(&self, other: &Point, tolerance: f64) -> bool {
        self.distance_to(other) <= tolerance
    }

    /// Point reflected through `center`.
    pub fn reflect_about(&self, center: &Point) -> Point {
        Point::new(2.0 * center.x - self.x, 2.0 * center.y - self.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Style fingerprint of a fragment.
///
/// Equality, hashing and ordering all go through
/// [`VisualAttrs::canonical_width`], so `-0.0` and `0.0` compare equal and
/// every NaN payload is one key that sorts after `+inf`.
/// Ordering is by stroke width, then stroke colour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualAttrs {
    pub stroke_width: f64,
    /// Normalized colour, usually `#RRGGBB`
    pub stroke_color: String,
}

impl VisualAttrs {
    pub fn new(stroke_width: f64, stroke_color: impl Into<String>) -> Self {
        Self {
            stroke_width,
            stroke_color: stroke_color.into(),
        }
    }

    /// Stroke width with signed zeros folded to `0.0` and NaNs to one
    /// positive quiet NaN.
    pub fn canonical_width(&self) -> f64 {
        if self.stroke_width == 0.0 {
            0.0
        } else if self.stroke_width.is_nan() {
            f64::NAN.copysign(1.0)
        } else {
            self.stroke_width
        }
    }

    /// Canonical bit pattern of the stroke width.
    pub fn width_key(&self) -> u64 {
        self.canonical_width().to_bits()
    }
}

impl PartialEq for VisualAttrs {
    fn eq(&self, other: &Self) -> bool {
        self.width_key() == other.width_key() && self.stroke_color == other.stroke_color
    }
}

impl Eq for VisualAttrs {}

impl Hash for VisualAttrs {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width_key().hash(state);
        self.stroke_color.hash(state);
    }
}

impl PartialOrd for VisualAttrs {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VisualAttrs {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_width()
            .total_cmp(&other.canonical_width())
            .then_with(|| self.stroke_color.cmp(&other.stroke_color))
    }
}

impl fmt::Display for VisualAttrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stroke={}, width={}", self.stroke_color, self.stroke_width)
    }
}
