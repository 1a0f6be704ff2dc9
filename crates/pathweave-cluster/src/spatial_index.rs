//! Grid spatial hash over segment endpoints.
//!
//! The plane is split into square cells of side `2 * tolerance`. A point
//! within `tolerance` of a query always lies in the query's cell or one of
//! its eight neighbours, so a query inspects a 3x3 block and then filters by
//! true distance.

use pathweave_core::{ClusterError, Point, PathSegment, SegmentId};
use std::cmp::Ordering;
use std::collections::HashMap;

type CellKey = (i64, i64);

#[derive(Debug, Clone, Copy)]
struct IndexedEndpoint {
    point: Point,
    segment_id: SegmentId,
    is_start: bool,
}

/// An endpoint found by a proximity query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyEndpoint {
    pub segment_id: SegmentId,
    /// True for the segment's start point, false for its end point
    pub is_start: bool,
    pub distance: f64,
}

/// Statistics about index occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpatialIndexStats {
    pub endpoint_count: usize,
    pub occupied_cells: usize,
    pub max_bucket_size: usize,
}

/// Uniform grid of endpoints keyed by cell coordinates.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tolerance: f64,
    cell_size: f64,
    grid: HashMap<CellKey, Vec<IndexedEndpoint>>,
    endpoint_count: usize,
}

impl SpatialIndex {
    /// Creates an empty index.
    ///
    /// # Errors
    /// [`ClusterError::InvalidTolerance`] unless `tolerance` is finite and
    /// positive.
    pub fn new(tolerance: f64) -> Result<Self, ClusterError> {
        validate_tolerance(tolerance)?;
        Ok(Self {
            tolerance,
            cell_size: tolerance * 2.0,
            grid: HashMap::new(),
            endpoint_count: 0,
        })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Cell of `point`. Keys saturate at the `i64` range; the distance
    /// filter in [`SpatialIndex::find_nearby`] keeps that exact.
    fn cell_of(&self, point: &Point) -> CellKey {
        (
            (point.x / self.cell_size).floor() as i64,
            (point.y / self.cell_size).floor() as i64,
        )
    }

    fn insert(&mut self, point: Point, segment_id: SegmentId, is_start: bool) {
        let key = self.cell_of(&point);
        self.grid.entry(key).or_default().push(IndexedEndpoint {
            point,
            segment_id,
            is_start,
        });
        self.endpoint_count += 1;
    }

    /// True when `segment` exposes its end point to the index.
    ///
    /// A segment closed by command and back at its start indexes only its
    /// start, so it cannot match itself.
    pub fn indexes_end(&self, segment: &PathSegment) -> bool {
        !segment.is_closed_loop(self.tolerance)
    }

    /// Adds a segment's endpoints.
    pub fn add_segment(&mut self, segment: &PathSegment) {
        self.insert(segment.start, segment.segment_id, true);
        if self.indexes_end(segment) {
            self.insert(segment.end, segment.segment_id, false);
        }
    }

    /// Adds every segment's endpoints.
    pub fn add_segments<'a>(&mut self, segments: impl IntoIterator<Item = &'a PathSegment>) {
        for segment in segments {
            self.add_segment(segment);
        }
    }

    /// All endpoints within tolerance of `point`, except those of `exclude`.
    ///
    /// Sorted by distance, then segment id, then start before end.
    pub fn find_nearby(&self, point: &Point, exclude: Option<SegmentId>) -> Vec<NearbyEndpoint> {
        let (cx, cy) = self.cell_of(point);
        let mut results = Vec::new();

        for dx in -1..=1 {
            for dy in -1..=1 {
                let (Some(x), Some(y)) = (cx.checked_add(dx), cy.checked_add(dy)) else {
                    continue;
                };
                let Some(bucket) = self.grid.get(&(x, y)) else {
                    continue;
                };
                for entry in bucket {
                    if Some(entry.segment_id) == exclude {
                        continue;
                    }
                    let distance = point.distance_to(&entry.point);
                    if distance <= self.tolerance {
                        results.push(NearbyEndpoint {
                            segment_id: entry.segment_id,
                            is_start: entry.is_start,
                            distance,
                        });
                    }
                }
            }
        }

        results.sort_by(compare_nearby);
        results
    }

    pub fn stats(&self) -> SpatialIndexStats {
        SpatialIndexStats {
            endpoint_count: self.endpoint_count,
            occupied_cells: self.grid.len(),
            max_bucket_size: self.grid.values().map(Vec::len).max().unwrap_or(0),
        }
    }
}

/// Tolerance must be finite and positive; the grid cell side is twice it.
pub fn validate_tolerance(tolerance: f64) -> Result<(), ClusterError> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(())
    } else {
        Err(ClusterError::InvalidTolerance { tolerance })
    }
}

fn compare_nearby(a: &NearbyEndpoint, b: &NearbyEndpoint) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then(a.segment_id.cmp(&b.segment_id))
        .then(b.is_start.cmp(&a.is_start))
}
