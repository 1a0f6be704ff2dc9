//! Run summary printed by the command-line front end.

use pathweave_core::{ClusterStats, VisualAttrs};
use pathweave_svg::SkipCounts;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Statistics for one style partition.
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub stroke_color: String,
    pub stroke_width: f64,
    pub stats: ClusterStats,
    pub path_count_reduction: f64,
}

impl GroupReport {
    pub fn new(attrs: &VisualAttrs, stats: ClusterStats) -> Self {
        Self {
            stroke_color: attrs.stroke_color.clone(),
            stroke_width: attrs.stroke_width,
            path_count_reduction: stats.path_count_reduction(),
            stats,
        }
    }
}

/// Everything one run did.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub tolerance: f64,
    pub by_attrs: bool,
    pub extracted_segments: usize,
    pub skipped_empty: usize,
    pub skipped_white: usize,
    pub skipped_degenerate: usize,
    /// One entry per style in by-attrs mode, empty otherwise
    pub groups: Vec<GroupReport>,
    /// Totals over the whole run
    pub stats: ClusterStats,
    pub path_count_reduction: f64,
}

impl RunReport {
    pub fn new(
        input: PathBuf,
        output: PathBuf,
        tolerance: f64,
        extracted_segments: usize,
        skipped: SkipCounts,
    ) -> Self {
        Self {
            input,
            output,
            tolerance,
            by_attrs: false,
            extracted_segments,
            skipped_empty: skipped.empty,
            skipped_white: skipped.white,
            skipped_degenerate: skipped.degenerate,
            groups: Vec::new(),
            stats: ClusterStats::default(),
            path_count_reduction: 0.0,
        }
    }

    /// Records the totals of a single clustering pass.
    pub fn set_stats(&mut self, stats: ClusterStats) {
        self.path_count_reduction = stats.path_count_reduction();
        self.stats = stats;
    }

    /// Records one style partition and folds it into the totals.
    pub fn add_group(&mut self, attrs: &VisualAttrs, stats: ClusterStats) {
        self.by_attrs = true;
        let totals = self.stats.merge(&stats);
        self.groups.push(GroupReport::new(attrs, stats));
        self.set_stats(totals);
    }

    pub fn skipped_total(&self) -> usize {
        self.skipped_empty + self.skipped_white + self.skipped_degenerate
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn write_stats(
    f: &mut fmt::Formatter<'_>,
    indent: &str,
    stats: &ClusterStats,
) -> fmt::Result {
    writeln!(f, "{indent}Input segments: {}", stats.total_input_segments)?;
    writeln!(f, "{indent}Output chains: {}", stats.total_chains)?;
    writeln!(f, "{indent}Orphan segments: {}", stats.orphan_count)?;
    writeln!(f, "{indent}Loops detected: {}", stats.loop_count)?;
    writeln!(f, "{indent}Max chain length: {}", stats.max_chain_length)?;
    writeln!(f, "{indent}Avg chain length: {:.2}", stats.avg_chain_length)?;
    writeln!(
        f,
        "{indent}Path count reduction: {:.1}%",
        stats.path_count_reduction()
    )
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input: {}", self.input.display())?;
        writeln!(f, "Output: {}", self.output.display())?;
        writeln!(f, "Tolerance: {}", self.tolerance)?;
        write!(f, "Extracted {} path segments", self.extracted_segments)?;
        if self.skipped_total() > 0 {
            write!(
                f,
                " ({} empty, {} white, {} degenerate skipped)",
                self.skipped_empty, self.skipped_white, self.skipped_degenerate
            )?;
        }
        writeln!(f)?;

        if self.by_attrs {
            for group in &self.groups {
                writeln!(f)?;
                writeln!(f, "{} (width {}):", group.stroke_color, group.stroke_width)?;
                write_stats(f, "  ", &group.stats)?;
            }
            writeln!(f)?;
            writeln!(f, "Total output paths: {}", self.stats.output_path_count())
        } else {
            writeln!(f)?;
            write_stats(f, "", &self.stats)
        }
    }
}
