//! Clustering orchestrator.
//!
//! Runs the pipeline index -> adjacency -> components -> walk -> merge and
//! assembles a [`ClusterResult`]. Components are processed in order of their
//! lowest input position; members a walk leaves behind are split into their
//! own sub-components and processed right after their parent.

use crate::graph::AdjacencyGraph;
use crate::merge::merge_segments;
use crate::ordering::order_component;
use crate::spatial_index::{validate_tolerance, SpatialIndex};
use crate::union_find::UnionFind;
use pathweave_core::{
    ClusterError, ClusterResult, PathChain, PathSegment, Result, SegmentId, VisualAttrs,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, trace, warn};

/// Default endpoint tolerance in drawing units.
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// What to do with a chain whose members differ in style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MixedAttrsPolicy {
    /// The chain takes the style of its earliest input member
    #[default]
    FirstSegment,
    /// Every member goes to the orphan list unchanged
    Orphan,
}

impl std::str::FromStr for MixedAttrsPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "first_segment" | "first" => Ok(Self::FirstSegment),
            "orphan" | "orphans" => Ok(Self::Orphan),
            other => Err(format!("unknown mixed-attrs policy: {other}")),
        }
    }
}

/// Parameters of one clustering run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterOptions {
    pub tolerance: f64,
    pub mixed_attrs: MixedAttrsPolicy,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            mixed_attrs: MixedAttrsPolicy::default(),
        }
    }
}

impl ClusterOptions {
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    pub fn with_mixed_attrs(mut self, policy: MixedAttrsPolicy) -> Self {
        self.mixed_attrs = policy;
        self
    }

    /// Tolerance must be finite and positive.
    pub fn validate(&self) -> std::result::Result<(), ClusterError> {
        validate_tolerance(self.tolerance)
    }
}

fn check_unique_ids(segments: &[PathSegment]) -> std::result::Result<(), ClusterError> {
    let mut seen = HashSet::with_capacity(segments.len());
    for segment in segments {
        if !seen.insert(segment.segment_id) {
            return Err(ClusterError::DuplicateSegmentId {
                id: segment.segment_id,
            });
        }
    }
    Ok(())
}

/// Groups `positions` by contact, restricted to contacts inside the group.
fn components_of(
    positions: &[usize],
    segments: &[PathSegment],
    graph: &AdjacencyGraph,
    position_of: &HashMap<SegmentId, usize>,
) -> Vec<Vec<usize>> {
    let local: HashMap<usize, usize> = positions
        .iter()
        .enumerate()
        .map(|(local, &position)| (position, local))
        .collect();
    let mut uf = UnionFind::new(positions.len());

    for (a, &position) in positions.iter().enumerate() {
        for connection in graph.connections(segments[position].segment_id) {
            let other = position_of
                .get(&connection.other)
                .and_then(|p| local.get(p));
            if let Some(&b) = other {
                uf.union(a, b);
            }
        }
    }

    uf.groups()
        .into_iter()
        .map(|group| group.into_iter().map(|local| positions[local]).collect())
        .collect()
}

struct Clusterer<'a> {
    segments: &'a [PathSegment],
    options: ClusterOptions,
    graph: AdjacencyGraph,
    position_of: HashMap<SegmentId, usize>,
    chains: Vec<PathChain>,
    orphans: Vec<PathSegment>,
}

impl<'a> Clusterer<'a> {
    fn new(segments: &'a [PathSegment], options: ClusterOptions) -> Result<Self> {
        let mut index = SpatialIndex::new(options.tolerance)?;
        index.add_segments(segments);
        let graph = AdjacencyGraph::build(segments, &index);

        let stats = index.stats();
        debug!(
            "indexed {} endpoints in {} cells (largest bucket {}), {} contacts",
            stats.endpoint_count,
            stats.occupied_cells,
            stats.max_bucket_size,
            graph.edge_count()
        );

        let position_of = segments
            .iter()
            .enumerate()
            .map(|(position, segment)| (segment.segment_id, position))
            .collect();

        Ok(Self {
            segments,
            options,
            graph,
            position_of,
            chains: Vec::new(),
            orphans: Vec::new(),
        })
    }

    fn segment(&self, id: SegmentId) -> Option<&'a PathSegment> {
        let segments: &'a [PathSegment] = self.segments;
        self.position_of.get(&id).map(|&p| &segments[p])
    }

    fn run(mut self) -> Result<ClusterResult> {
        let all: Vec<usize> = (0..self.segments.len()).collect();
        let mut pending = components_of(&all, self.segments, &self.graph, &self.position_of);
        debug!("found {} components", pending.len());
        pending.reverse();

        while let Some(component) = pending.pop() {
            let leftovers = self.process(&component)?;
            if leftovers.is_empty() {
                continue;
            }
            let mut parts = components_of(&leftovers, self.segments, &self.graph, &self.position_of);
            trace!("{} leftover segments form {} parts", leftovers.len(), parts.len());
            parts.reverse();
            pending.extend(parts);
        }

        Ok(ClusterResult::new(
            self.chains,
            self.orphans,
            self.segments.len(),
        ))
    }

    /// Emits one component; returns the positions its walk did not reach.
    fn process(&mut self, component: &[usize]) -> Result<Vec<usize>> {
        let segments = self.segments;
        if let [position] = component {
            let segment = &segments[*position];
            if segment.is_self_closing(self.options.tolerance) {
                trace!("segment {} closes on itself", segment.segment_id);
                self.push_chain(
                    vec![(segment.segment_id, false)],
                    segment.d_attribute.clone(),
                    segment.visual_attrs.clone(),
                    true,
                );
            } else {
                trace!("segment {} is an orphan", segment.segment_id);
                self.orphans.push(segment.clone());
            }
            return Ok(Vec::new());
        }

        let ids: Vec<SegmentId> = component
            .iter()
            .map(|&p| self.segments[p].segment_id)
            .collect();
        let order = order_component(&ids, &self.graph);
        let walked: HashSet<SegmentId> = order.segment_ids().collect();

        let (visited, leftovers): (Vec<usize>, Vec<usize>) = component
            .iter()
            .copied()
            .partition(|&p| walked.contains(&segments[p].segment_id));

        if order.len() == 1 {
            // Walk could not leave its start; treat it like a lone segment
            if let Some(&position) = visited.first() {
                self.process(&[position])?;
            }
            return Ok(leftovers);
        }

        let members: Vec<&PathSegment> = order
            .segment_ids()
            .filter_map(|id| self.segment(id))
            .collect();

        let Some(attrs) = self.chain_attrs(&members) else {
            let mut rejected = members.clone();
            rejected.sort_by_key(|s| self.position_of.get(&s.segment_id).copied());
            self.orphans.extend(rejected.into_iter().cloned());
            return Ok(leftovers);
        };

        let steps = order
            .steps
            .iter()
            .filter_map(|&(id, reversed)| self.segment(id).map(|s| (s, reversed)));
        let merged_d = merge_segments(steps)?;

        self.push_chain(order.steps, merged_d, attrs, order.is_loop);
        Ok(leftovers)
    }

    /// Style of a chain, or `None` when it must be dissolved.
    fn chain_attrs(&self, members: &[&PathSegment]) -> Option<VisualAttrs> {
        let earliest = members
            .iter()
            .min_by_key(|s| self.position_of.get(&s.segment_id).copied())?;
        let attrs = &earliest.visual_attrs;
        if members.iter().all(|s| &s.visual_attrs == attrs) {
            return Some(attrs.clone());
        }

        match self.options.mixed_attrs {
            MixedAttrsPolicy::FirstSegment => {
                warn!(
                    "chain of {} segments mixes styles; using {}",
                    members.len(),
                    attrs
                );
                Some(attrs.clone())
            }
            MixedAttrsPolicy::Orphan => {
                warn!(
                    "chain of {} segments mixes styles; leaving them unmerged",
                    members.len()
                );
                None
            }
        }
    }

    fn push_chain(
        &mut self,
        steps: Vec<(SegmentId, bool)>,
        merged_d: String,
        visual_attrs: VisualAttrs,
        is_loop: bool,
    ) {
        let (segment_ids, reversed) = steps.into_iter().unzip();
        self.chains.push(PathChain {
            chain_id: self.chains.len(),
            segment_ids,
            reversed,
            merged_d,
            visual_attrs,
            is_loop,
        });
    }
}

/// Clusters segments with the default mixed-style policy.
pub fn cluster(segments: &[PathSegment], tolerance: f64) -> Result<ClusterResult> {
    cluster_with(segments, &ClusterOptions::new(tolerance))
}

/// Clusters segments into chains and orphans.
///
/// # Errors
/// [`ClusterError::InvalidTolerance`] and [`ClusterError::DuplicateSegmentId`]
/// for bad input; a merge error if a segment's commands cannot be reversed.
pub fn cluster_with(segments: &[PathSegment], options: &ClusterOptions) -> Result<ClusterResult> {
    options.validate()?;
    check_unique_ids(segments)?;

    if segments.is_empty() {
        return Ok(ClusterResult::empty());
    }

    debug!(
        "clustering {} segments at tolerance {}",
        segments.len(),
        options.tolerance
    );
    let result = Clusterer::new(segments, *options)?.run()?;
    debug!(
        "{} chains ({} loops), {} orphans",
        result.stats.total_chains, result.stats.loop_count, result.stats.orphan_count
    );
    Ok(result)
}

/// Clusters each style partition independently.
pub fn cluster_by_attrs(
    segments: &[PathSegment],
    tolerance: f64,
) -> Result<BTreeMap<VisualAttrs, ClusterResult>> {
    cluster_by_attrs_with(segments, &ClusterOptions::new(tolerance))
}

/// Partitions by [`VisualAttrs`] (keeping input order) and clusters each part.
pub fn cluster_by_attrs_with(
    segments: &[PathSegment],
    options: &ClusterOptions,
) -> Result<BTreeMap<VisualAttrs, ClusterResult>> {
    options.validate()?;
    check_unique_ids(segments)?;

    let mut partitions: BTreeMap<VisualAttrs, Vec<PathSegment>> = BTreeMap::new();
    for segment in segments {
        partitions
            .entry(segment.visual_attrs.clone())
            .or_default()
            .push(segment.clone());
    }
    debug!("{} style partitions", partitions.len());

    partitions
        .into_iter()
        .map(|(attrs, part)| cluster_with(&part, options).map(|result| (attrs, result)))
        .collect()
}
