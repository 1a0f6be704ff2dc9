//! # Clustered SVG Export
//!
//! Writes chains and orphans back out as an SVG document.
//!
//! Chains are grouped by style. Groups are sorted by stroke width then
//! colour and named `group-{n}-w{width:.2}`, each with a `<title>` naming
//! the style. Every emitted path has `fill="none"`, round caps and joins,
//! and the document's common transform.

use crate::error::Result;
use crate::import::DocumentInfo;
use crate::xml::escape;
use pathweave_cluster::{format_commands, parse_path_data};
use pathweave_core::{ClusterResult, PathChain, PathSegment, VisualAttrs};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use tracing::debug;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Renders clustering results as SVG text.
#[derive(Debug, Clone, Default)]
pub struct SvgExporter {
    /// Decimal places for merged chain coordinates; `None` keeps full precision
    pub precision: Option<usize>,
}

impl SvgExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// Command text of a chain. Only merged chains are reformatted; a
    /// one-segment chain keeps its source text.
    fn chain_data(&self, chain: &PathChain) -> String {
        match self.precision {
            Some(_) if chain.segment_count() > 1 => {
                format_commands(&parse_path_data(&chain.merged_d), self.precision)
            }
            _ => chain.merged_d.clone(),
        }
    }

    fn open_document(&self, out: &mut String, document: &DocumentInfo) {
        out.push_str("<?xml version='1.0' encoding='UTF-8'?>\n");
        let _ = write!(
            out,
            "<svg xmlns=\"{}\" xmlns:xlink=\"{}\" width=\"{}\" height=\"{}\"",
            SVG_NS,
            XLINK_NS,
            escape(&document.width),
            escape(&document.height)
        );
        if let Some(view_box) = &document.view_box {
            let _ = write!(out, " viewBox=\"{}\"", escape(view_box));
        }
        out.push_str(">\n");
    }

    fn open_group(&self, out: &mut String, id: &str, title: &str) {
        let _ = writeln!(out, "  <g id=\"{}\">", escape(id));
        let _ = writeln!(out, "    <title>{}</title>", escape(title));
    }

    fn path(
        &self,
        out: &mut String,
        id: &str,
        d: &str,
        attrs: &VisualAttrs,
        transform: Option<&str>,
    ) {
        let _ = write!(
            out,
            "    <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" \
             stroke-linecap=\"round\" stroke-linejoin=\"round\"",
            escape(d),
            escape(&attrs.stroke_color),
            attrs.stroke_width
        );
        if let Some(transform) = transform {
            let _ = write!(out, " transform=\"{}\"", escape(transform));
        }
        let _ = writeln!(out, " id=\"{}\" />", escape(id));
    }

    fn chain_paths(&self, out: &mut String, chains: &[&PathChain], document: &DocumentInfo) {
        for chain in chains {
            self.path(
                out,
                &format!("chain-{}", chain.chain_id),
                &self.chain_data(chain),
                &chain.visual_attrs,
                document.transform.as_deref(),
            );
        }
    }

    fn orphan_paths(&self, out: &mut String, orphans: &[PathSegment], document: &DocumentInfo) {
        for segment in orphans {
            self.path(
                out,
                &format!("orphan-{}", segment.segment_id),
                &segment.d_attribute,
                &segment.visual_attrs,
                document.transform.as_deref(),
            );
        }
    }

    /// Renders one result: chains grouped by style, orphans in a trailing
    /// `orphans` group.
    pub fn render(&self, document: &DocumentInfo, result: &ClusterResult) -> String {
        let mut out = String::new();
        self.open_document(&mut out, document);

        let mut grouped: BTreeMap<&VisualAttrs, Vec<&PathChain>> = BTreeMap::new();
        for chain in &result.chains {
            grouped.entry(&chain.visual_attrs).or_default().push(chain);
        }

        for (index, (attrs, chains)) in grouped.iter().enumerate() {
            self.open_group(&mut out, &group_id(index, attrs), &attrs.to_string());
            self.chain_paths(&mut out, chains, document);
            out.push_str("  </g>\n");
        }

        if !result.orphan_segments.is_empty() {
            self.open_group(&mut out, "orphans", "Unconnected segments");
            self.orphan_paths(&mut out, &result.orphan_segments, document);
            out.push_str("  </g>\n");
        }

        out.push_str("</svg>\n");
        out
    }

    /// Renders per-style results: one group per style holding its chains
    /// and then its orphans.
    pub fn render_by_attrs(
        &self,
        document: &DocumentInfo,
        results: &BTreeMap<VisualAttrs, ClusterResult>,
    ) -> String {
        let mut out = String::new();
        self.open_document(&mut out, document);

        for (index, (attrs, result)) in results.iter().enumerate() {
            self.open_group(&mut out, &group_id(index, attrs), &attrs.to_string());
            let chains: Vec<&PathChain> = result.chains.iter().collect();
            self.chain_paths(&mut out, &chains, document);
            self.orphan_paths(&mut out, &result.orphan_segments, document);
            out.push_str("  </g>\n");
        }

        out.push_str("</svg>\n");
        out
    }

    /// Writes [`SvgExporter::render`] output to `path`.
    pub fn export_file(
        &self,
        path: impl AsRef<Path>,
        document: &DocumentInfo,
        result: &ClusterResult,
    ) -> Result<()> {
        let content = self.render(document, result);
        std::fs::write(path.as_ref(), content)?;
        debug!("Wrote {}", path.as_ref().display());
        Ok(())
    }

    /// Writes [`SvgExporter::render_by_attrs`] output to `path`.
    pub fn export_file_by_attrs(
        &self,
        path: impl AsRef<Path>,
        document: &DocumentInfo,
        results: &BTreeMap<VisualAttrs, ClusterResult>,
    ) -> Result<()> {
        let content = self.render_by_attrs(document, results);
        std::fs::write(path.as_ref(), content)?;
        debug!("Wrote {}", path.as_ref().display());
        Ok(())
    }
}

fn group_id(index: usize, attrs: &VisualAttrs) -> String {
    format!("group-{}-w{:.2}", index, attrs.stroke_width)
}
