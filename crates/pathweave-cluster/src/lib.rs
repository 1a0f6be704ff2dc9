//! # Pathweave Cluster
//!
//! Joins fragmented stroke paths into continuous chains.
//!
//! ## Pipeline
//!
//! ```text
//! segments
//!   ├── Spatial Index (grid hash of endpoints, cell side 2t)
//!   ├── Adjacency Graph (endpoint contacts within tolerance)
//!   ├── Union-Find (connected components)
//!   ├── Chain Orderer (walk from a free end, or around a cycle)
//!   └── Command Merger (normalize, reverse, concatenate)
//! -> ClusterResult (chains + orphans + stats)
//! ```
//!
//! Everything runs synchronously on in-memory values; no step performs I/O.
//!
//! ## Usage
//!
//! ```rust
//! use pathweave_cluster::{build_segment, cluster};
//! use pathweave_core::VisualAttrs;
//!
//! let attrs = VisualAttrs::new(1.0, "#000000");
//! let segments = vec![
//!     build_segment(0, "M 0,0 L 10,0", attrs.clone()).unwrap(),
//!     build_segment(1, "M 10,0 L 20,0", attrs).unwrap(),
//! ];
//!
//! let result = cluster(&segments, 0.5).unwrap();
//! assert_eq!(result.chains.len(), 1);
//! assert_eq!(result.chains[0].merged_d, "M 0 0 L 10 0 L 20 0");
//! ```

pub mod cluster;
pub mod graph;
pub mod merge;
pub mod ordering;
pub mod path_data;
pub mod spatial_index;
pub mod union_find;

pub use cluster::{
    cluster, cluster_by_attrs, cluster_by_attrs_with, cluster_with, ClusterOptions,
    MixedAttrsPolicy, DEFAULT_TOLERANCE,
};
pub use graph::{AdjacencyGraph, Connection, Node};
pub use merge::{
    close_explicitly, merge_commands, merge_segments, oriented_commands, reverse_commands,
    reverse_path_data, strip_leading_move,
};
pub use ordering::{order_component, ChainOrder};
pub use path_data::{
    build_segment, extract_endpoints, format_commands, format_number, is_path_closed, normalize,
    parse_path_data, CommandKind, Cursor, PathCommand,
};
pub use spatial_index::{validate_tolerance, NearbyEndpoint, SpatialIndex, SpatialIndexStats};
pub use union_find::UnionFind;
