//! # SVG Fragment Import
//!
//! Scans an SVG document for `<path>` elements and turns each drawable one
//! into a [`PathSegment`].
//!
//! Supports:
//! - `stroke`, `stroke-width` and `transform` attributes, with `style`
//!   declarations as fallback
//! - Colour normalization (see [`crate::color`])
//! - Skipping white-stroke halos unless asked to keep them
//! - Document `width`, `height` and `viewBox`, and the transform shared by
//!   every path

use crate::color::{is_white, normalize_color};
use crate::error::{Result, SvgError};
use crate::xml::unescape;
use pathweave_cluster::build_segment;
use pathweave_core::{PathSegment, VisualAttrs};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Document-level attributes needed to write the result back out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub width: String,
    pub height: String,
    pub view_box: Option<String>,
    /// Transform carried by every path, if they all agree
    pub transform: Option<String>,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "100%".to_string(),
            view_box: None,
            transform: None,
        }
    }
}

/// Counts of `<path>` elements that did not become segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkipCounts {
    /// Missing or empty `d`
    pub empty: usize,
    /// White stroke
    pub white: usize,
    /// `d` without any drawable point
    pub degenerate: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.empty + self.white + self.degenerate
    }
}

/// Result of importing one document.
#[derive(Debug, Clone)]
pub struct ImportedDrawing {
    pub segments: Vec<PathSegment>,
    pub document: DocumentInfo,
    pub skipped: SkipCounts,
}

/// Extracts path fragments from SVG text.
#[derive(Debug, Clone)]
pub struct SvgImporter {
    /// Keep white-stroke fragments
    pub keep_white: bool,
    svg_tag: Regex,
    path_tag: Regex,
    attribute: Regex,
}

/// Attributes of one element, keyed by name.
type Attributes = HashMap<String, String>;

impl SvgImporter {
    /// Creates an importer; `keep_white` keeps white-stroke fragments.
    pub fn new(keep_white: bool) -> Result<Self> {
        Ok(Self {
            keep_white,
            svg_tag: Regex::new(r"<svg\b([^>]*)>")?,
            path_tag: Regex::new(r"<path\b([^>]*)>")?,
            attribute: Regex::new(
                r#"([A-Za-z_][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
            )?,
        })
    }

    fn attributes(&self, tag_body: &str) -> Attributes {
        self.attribute
            .captures_iter(tag_body)
            .filter_map(|caps| {
                let name = caps.get(1)?.as_str().to_string();
                let value = caps.get(2).or_else(|| caps.get(3))?.as_str();
                Some((name, unescape(value)))
            })
            .collect()
    }

    fn document_info(&self, svg_content: &str) -> Result<DocumentInfo> {
        let caps = self
            .svg_tag
            .captures(svg_content)
            .ok_or(SvgError::MissingRoot)?;
        let attrs = self.attributes(caps.get(1).map_or("", |m| m.as_str()));
        let defaults = DocumentInfo::default();

        Ok(DocumentInfo {
            width: attrs.get("width").cloned().unwrap_or(defaults.width),
            height: attrs.get("height").cloned().unwrap_or(defaults.height),
            view_box: attrs.get("viewBox").filter(|v| !v.is_empty()).cloned(),
            transform: None,
        })
    }

    /// Imports SVG from string content.
    pub fn import_str(&self, svg_content: &str) -> Result<ImportedDrawing> {
        let mut document = self.document_info(svg_content)?;
        let mut segments = Vec::new();
        let mut skipped = SkipCounts::default();
        let mut common_transform: Option<Option<String>> = None;

        for caps in self.path_tag.captures_iter(svg_content) {
            let attrs = self.attributes(caps.get(1).map_or("", |m| m.as_str()));
            let d = attrs.get("d").map(|d| d.trim()).unwrap_or("");
            if d.is_empty() {
                skipped.empty += 1;
                continue;
            }

            let transform = attrs.get("transform").cloned();
            common_transform = match common_transform {
                None => Some(transform),
                Some(seen) if seen == transform => Some(seen),
                Some(_) => Some(None),
            };

            let style = style_declarations(attrs.get("style").map(String::as_str));
            let lookup = |name: &str| attrs.get(name).or_else(|| style.get(name));

            let stroke = lookup("stroke").map(String::as_str).unwrap_or("");
            if !self.keep_white && is_white(stroke) {
                skipped.white += 1;
                continue;
            }

            let stroke_width = lookup("stroke-width")
                .and_then(|w| parse_length(w))
                .unwrap_or(1.0);
            let visual = VisualAttrs::new(stroke_width, normalize_color(stroke));

            match build_segment(segments.len(), d, visual) {
                Ok(segment) => segments.push(segment),
                Err(err) => {
                    warn!("Skipping path fragment: {}", err);
                    skipped.degenerate += 1;
                }
            }
        }

        document.transform = common_transform.flatten();
        debug!(
            "Imported {} segments ({} empty, {} white, {} degenerate skipped)",
            segments.len(),
            skipped.empty,
            skipped.white,
            skipped.degenerate
        );

        Ok(ImportedDrawing {
            segments,
            document,
            skipped,
        })
    }

    /// Imports an SVG file.
    pub fn import_file(&self, path: impl AsRef<Path>) -> Result<ImportedDrawing> {
        let content = std::fs::read_to_string(path.as_ref())?;
        self.import_str(&content)
    }
}

/// Parses `name: value; ...` declarations of a `style` attribute.
fn style_declarations(style: Option<&str>) -> HashMap<String, String> {
    style
        .unwrap_or("")
        .split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let name = name.trim();
            (!name.is_empty()).then(|| (name.to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Reads a length such as `1.5` or `1.5px`; other units are read as-is.
fn parse_length(text: &str) -> Option<f64> {
    let text = text.trim();
    let number = text.trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
    number.parse::<f64>().ok().filter(|w| w.is_finite())
}
