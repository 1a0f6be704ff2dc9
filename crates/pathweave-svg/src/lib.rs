//! # Pathweave SVG
//!
//! SVG input and output around the clustering engine.
//!
//! - [`SvgImporter`] scans a document for `<path>` elements and builds
//!   [`pathweave_core::PathSegment`]s with normalized stroke styles.
//! - [`SvgExporter`] writes chains and orphans back out, grouped by style.
//!
//! Documents are scanned with regular expressions rather than a full XML
//! parser; nested groups, `<use>` references and CSS classes are ignored.

pub mod color;
pub mod error;
pub mod export;
pub mod import;
pub mod xml;

pub use color::{is_white, normalize_color, WHITE};
pub use error::{Result, SvgError};
pub use export::SvgExporter;
pub use import::{DocumentInfo, ImportedDrawing, SkipCounts, SvgImporter};
