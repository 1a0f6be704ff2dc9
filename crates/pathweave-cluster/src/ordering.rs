//! Traversal order of one connected component.
//!
//! An open chain starts at the lowest-id segment with a free side (an
//! endpoint touching no other member) and leaves through its other side. A
//! component without free sides is a cycle and starts at its lowest-id
//! member, forwards. At each step the walk follows the lowest-id unvisited
//! member touching the exit point; on a tie between two contacts with the
//! same segment, entering at that segment's start wins.
//!
//! The walk stops when no unvisited member touches the exit point. At a
//! branch point this leaves members behind; the caller re-clusters them.

use crate::graph::{AdjacencyGraph, Node};
use pathweave_core::SegmentId;
use std::collections::{BTreeSet, HashSet};
use tracing::trace;

/// Ordered walk through (part of) a component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainOrder {
    /// `(segment_id, reversed)` in traversal order
    pub steps: Vec<(SegmentId, bool)>,
    pub is_loop: bool,
}

impl ChainOrder {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn segment_ids(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.steps.iter().map(|&(id, _)| id)
    }

    pub fn contains(&self, id: SegmentId) -> bool {
        self.steps.iter().any(|&(s, _)| s == id)
    }
}

/// Which side of `node` touches no member, if any.
///
/// `Some(true)` means the start is free, so traversal runs forwards.
fn free_side(node: &Node, members: &BTreeSet<SegmentId>) -> Option<bool> {
    if node.single_point {
        return None;
    }
    let touches = |at_start: bool| {
        node.connections_at(at_start)
            .any(|c| members.contains(&c.other))
    };
    if !touches(true) {
        Some(true)
    } else if !touches(false) {
        Some(false)
    } else {
        None
    }
}

/// Orders `members` (one connected component) into a walk.
pub fn order_component(members: &[SegmentId], graph: &AdjacencyGraph) -> ChainOrder {
    let members: BTreeSet<SegmentId> = members.iter().copied().collect();
    let Some(&lowest) = members.iter().next() else {
        return ChainOrder::default();
    };

    let open_start = members.iter().find_map(|&id| {
        graph
            .node(id)
            .and_then(|node| free_side(node, &members))
            .map(|start_free| (id, !start_free))
    });
    let cyclic = open_start.is_none();
    let (mut current, mut reversed) = open_start.unwrap_or((lowest, false));

    trace!(
        "ordering {} segments from {} (reversed: {}, cyclic: {})",
        members.len(),
        current,
        reversed,
        cyclic
    );

    let mut visited = HashSet::with_capacity(members.len());
    let mut steps = Vec::with_capacity(members.len());

    loop {
        visited.insert(current);
        steps.push((current, reversed));

        let Some(node) = graph.node(current) else {
            break;
        };
        let next = node
            .connections_at(reversed)
            .filter(|c| members.contains(&c.other) && !visited.contains(&c.other))
            .min_by_key(|c| (c.other, !c.other_at_start));

        match next {
            Some(c) => {
                current = c.other;
                reversed = !c.other_at_start;
            }
            None => break,
        }
    }

    if steps.len() < members.len() {
        trace!(
            "walk stopped after {} of {} segments",
            steps.len(),
            members.len()
        );
    }

    let is_loop = cyclic && steps.len() >= 2 && closes(&steps, graph);
    ChainOrder { steps, is_loop }
}

/// True when the last exit point is back at the first entry point.
fn closes(steps: &[(SegmentId, bool)], graph: &AdjacencyGraph) -> bool {
    let (Some(&(first, first_rev)), Some(&(last, last_rev))) = (steps.first(), steps.last()) else {
        return false;
    };
    match (graph.node(first), graph.node(last)) {
        (Some(a), Some(b)) => a
            .entry_point(first_rev)
            .is_near(&b.exit_point(last_rev), graph.tolerance()),
        _ => false,
    }
}
