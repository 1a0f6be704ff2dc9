//! Endpoint adjacency between segments.

use crate::spatial_index::SpatialIndex;
use pathweave_core::{PathSegment, Point, SegmentId};
use std::collections::HashMap;
use tracing::trace;

/// One endpoint contact seen from the owning segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    pub other: SegmentId,
    /// Contact is at this segment's start (else its end)
    pub this_at_start: bool,
    /// Contact is at the other segment's start (else its end)
    pub other_at_start: bool,
}

/// Per-segment view used by traversal.
#[derive(Debug, Clone)]
pub struct Node {
    pub start: Point,
    pub end: Point,
    /// Closed and back at its start: both sides are the same point
    pub single_point: bool,
    pub connections: Vec<Connection>,
}

impl Node {
    /// Point a traversal leaves from.
    pub fn exit_point(&self, reversed: bool) -> Point {
        if reversed {
            self.start
        } else {
            self.end
        }
    }

    /// Point a traversal arrives at.
    pub fn entry_point(&self, reversed: bool) -> Point {
        if reversed {
            self.end
        } else {
            self.start
        }
    }

    /// Contacts at the start (`at_start`) or end side.
    pub fn connections_at(&self, at_start: bool) -> impl Iterator<Item = &Connection> + '_ {
        let single_point = self.single_point;
        self.connections
            .iter()
            .filter(move |c| single_point || c.this_at_start == at_start)
    }
}

/// Undirected contact graph stored as directed adjacency lists.
///
/// Every contact appears twice, once from each side.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    tolerance: f64,
    nodes: HashMap<SegmentId, Node>,
}

impl AdjacencyGraph {
    /// Queries `index` at every indexed endpoint of `segments`.
    pub fn build(segments: &[PathSegment], index: &SpatialIndex) -> Self {
        let mut nodes = HashMap::with_capacity(segments.len());

        for segment in segments {
            let id = segment.segment_id;
            let mut connections: Vec<Connection> = index
                .find_nearby(&segment.start, Some(id))
                .into_iter()
                .map(|hit| Connection {
                    other: hit.segment_id,
                    this_at_start: true,
                    other_at_start: hit.is_start,
                })
                .collect();

            let single_point = !index.indexes_end(segment);
            if !single_point {
                connections.extend(index.find_nearby(&segment.end, Some(id)).into_iter().map(
                    |hit| Connection {
                        other: hit.segment_id,
                        this_at_start: false,
                        other_at_start: hit.is_start,
                    },
                ));
            }

            trace!("segment {} has {} contacts", id, connections.len());
            nodes.insert(
                id,
                Node {
                    start: segment.start,
                    end: segment.end,
                    single_point,
                    connections,
                },
            );
        }

        Self {
            tolerance: index.tolerance(),
            nodes,
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn node(&self, id: SegmentId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Contacts of `id`; empty for unknown ids.
    pub fn connections(&self, id: SegmentId) -> &[Connection] {
        self.nodes
            .get(&id)
            .map(|node| node.connections.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of directed contact entries.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.connections.len()).sum()
    }

    /// True when every contact has its mirror entry.
    pub fn is_symmetric(&self) -> bool {
        self.nodes.iter().all(|(&id, node)| {
            node.connections.iter().all(|c| {
                let mirror = Connection {
                    other: id,
                    this_at_start: c.other_at_start,
                    other_at_start: c.this_at_start,
                };
                self.connections(c.other).contains(&mirror)
            })
        })
    }
}
