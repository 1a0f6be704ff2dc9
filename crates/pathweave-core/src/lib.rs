//! # Pathweave Core
//!
//! Core types and errors shared by every Pathweave crate.
//! Provides the geometry value types, the segment/chain model that
//! flows between the clustering engine and its import/export
//! collaborators, and the error taxonomy.

pub mod error;
pub mod geometry;
pub mod model;

pub use error::{ClusterError, Error, PathDataError, Result};
pub use geometry::{Point, VisualAttrs};
pub use model::{ChainId, ClusterResult, ClusterStats, PathChain, PathSegment, SegmentId};
