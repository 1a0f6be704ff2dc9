//! Segments, chains, and clustering results.

use crate::geometry::{Point, VisualAttrs};
use serde::{Deserialize, Serialize};

/// Identifier of an input fragment, unique within one clustering run.
pub type SegmentId = usize;

/// Identifier of an output chain.
pub type ChainId = usize;

/// One input fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub segment_id: SegmentId,
    /// First point visited by the command text
    pub start: Point,
    /// Point where replay of the command text terminates
    pub end: Point,
    /// Raw command text, kept verbatim
    pub d_attribute: String,
    pub visual_attrs: VisualAttrs,
    /// True when the command text ends with an explicit close-path
    pub is_closed: bool,
}

impl PathSegment {
    pub fn new(
        segment_id: SegmentId,
        start: Point,
        end: Point,
        d_attribute: impl Into<String>,
        visual_attrs: VisualAttrs,
        is_closed: bool,
    ) -> Self {
        Self {
            segment_id,
            start,
            end,
            d_attribute: d_attribute.into(),
            visual_attrs,
            is_closed,
        }
    }

    /// Closed by command *and* geometrically back at its start.
    ///
    /// Such a segment exposes a single endpoint to the spatial index.
    pub fn is_closed_loop(&self, tolerance: f64) -> bool {
        self.is_closed && self.start.is_near(&self.end, tolerance)
    }

    /// Closed by command *or* geometrically back at its start.
    ///
    /// A lone segment with this property becomes a one-segment loop chain
    /// instead of an orphan.
    pub fn is_self_closing(&self, tolerance: f64) -> bool {
        self.is_closed || self.start.is_near(&self.end, tolerance)
    }

    /// Entry and exit points when traversed with the given reversal flag.
    pub fn oriented_endpoints(&self, reversed: bool) -> (Point, Point) {
        if reversed {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        }
    }
}

/// One output path: the ordered merge of connected segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathChain {
    pub chain_id: ChainId,
    /// Contributing segments in traversal order
    pub segment_ids: Vec<SegmentId>,
    /// Reversal flag per entry of `segment_ids`
    pub reversed: Vec<bool>,
    /// Merged command text for the whole chain
    pub merged_d: String,
    pub visual_attrs: VisualAttrs,
    /// True when the chain has no free end
    pub is_loop: bool,
}

impl PathChain {
    /// Number of segments in this chain.
    pub fn segment_count(&self) -> usize {
        self.segment_ids.len()
    }
}

/// Statistics about a clustering run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClusterStats {
    pub total_input_segments: usize,
    pub total_chains: usize,
    pub orphan_count: usize,
    pub loop_count: usize,
    pub max_chain_length: usize,
    pub avg_chain_length: f64,
}

impl ClusterStats {
    /// Computes statistics over produced chains and orphans.
    pub fn compute(chains: &[PathChain], orphan_count: usize, total_input: usize) -> Self {
        let total_chained: usize = chains.iter().map(PathChain::segment_count).sum();
        Self {
            total_input_segments: total_input,
            total_chains: chains.len(),
            orphan_count,
            loop_count: chains.iter().filter(|c| c.is_loop).count(),
            max_chain_length: chains
                .iter()
                .map(PathChain::segment_count)
                .max()
                .unwrap_or(0),
            avg_chain_length: if chains.is_empty() {
                0.0
            } else {
                total_chained as f64 / chains.len() as f64
            },
        }
    }

    /// Number of paths a writer emits: one per chain plus one per orphan.
    pub fn output_path_count(&self) -> usize {
        self.total_chains + self.orphan_count
    }

    /// Percentage of paths removed relative to the input.
    pub fn path_count_reduction(&self) -> f64 {
        if self.total_input_segments == 0 {
            return 0.0;
        }
        (1.0 - self.output_path_count() as f64 / self.total_input_segments as f64) * 100.0
    }

    /// Combines statistics of independent runs (e.g. per style partition).
    pub fn merge(&self, other: &ClusterStats) -> ClusterStats {
        let total_chains = self.total_chains + other.total_chains;
        let chained = self.avg_chain_length * self.total_chains as f64
            + other.avg_chain_length * other.total_chains as f64;
        ClusterStats {
            total_input_segments: self.total_input_segments + other.total_input_segments,
            total_chains,
            orphan_count: self.orphan_count + other.orphan_count,
            loop_count: self.loop_count + other.loop_count,
            max_chain_length: self.max_chain_length.max(other.max_chain_length),
            avg_chain_length: if total_chains == 0 {
                0.0
            } else {
                chained / total_chains as f64
            },
        }
    }
}

/// Complete result of a clustering run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClusterResult {
    pub chains: Vec<PathChain>,
    pub orphan_segments: Vec<PathSegment>,
    pub stats: ClusterStats,
}

impl ClusterResult {
    /// Builds a result and computes its statistics.
    pub fn new(chains: Vec<PathChain>, orphans: Vec<PathSegment>, total_input: usize) -> Self {
        let stats = ClusterStats::compute(&chains, orphans.len(), total_input);
        Self {
            chains,
            orphan_segments: orphans,
            stats,
        }
    }

    /// Result of clustering nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the run produced neither chains nor orphans.
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty() && self.orphan_segments.is_empty()
    }
}
