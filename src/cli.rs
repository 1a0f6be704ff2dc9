//! Command-line front end.

use crate::report::RunReport;
use anyhow::{bail, Context};
use clap::Parser;
use pathweave_cluster::{cluster_by_attrs_with, cluster_with, MixedAttrsPolicy};
use pathweave_settings::{Config, ConfigOverrides};
use pathweave_svg::{SvgExporter, SvgImporter};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pathweave",
    about = "Cluster connected SVG path segments into continuous chains",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")")
)]
pub struct Args {
    /// Input SVG file
    pub input: PathBuf,

    /// Output SVG file (default: input stem plus the configured suffix)
    pub output: Option<PathBuf>,

    /// Endpoint matching tolerance in drawing units
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Keep white stroke paths (background halos)
    #[arg(long)]
    pub keep_white: bool,

    /// Cluster each stroke style separately
    #[arg(long)]
    pub by_attrs: bool,

    /// Handling of chains whose members differ in style: first-segment or orphan
    #[arg(long, value_name = "POLICY")]
    pub mixed_attrs: Option<MixedAttrsPolicy>,

    /// Decimal places for merged chain coordinates
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Configuration file (.toml or .json); defaults to the user config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            tolerance: self.tolerance,
            by_attrs: self.by_attrs.then_some(true),
            mixed_attrs: self.mixed_attrs,
            keep_white: self.keep_white.then_some(true),
            precision: self.precision,
        }
    }

    /// Config file values with command-line flags applied on top.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::load_default().context("Failed to load default config")?,
        };
        config.apply_overrides(&self.overrides());
        config.validate().context("Invalid options")?;
        Ok(config)
    }
}

/// Imports, clusters and exports one file.
pub fn execute(args: &Args) -> anyhow::Result<RunReport> {
    let config = args.resolve_config()?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.output_path(&args.input));

    let importer = SvgImporter::new(config.import.keep_white)?;
    let drawing = importer
        .import_file(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    info!("Extracted {} path segments", drawing.segments.len());

    if drawing.segments.is_empty() {
        bail!("No segments found to cluster in {}", args.input.display());
    }

    let options = config.cluster_options();
    let exporter = SvgExporter::new().with_precision(config.export.precision);
    let mut report = RunReport::new(
        args.input.clone(),
        output.clone(),
        options.tolerance,
        drawing.segments.len(),
        drawing.skipped,
    );

    if config.cluster.by_attrs {
        let results = cluster_by_attrs_with(&drawing.segments, &options)?;
        debug!("Clustered {} style groups", results.len());
        for (attrs, result) in &results {
            report.add_group(attrs, result.stats.clone());
        }
        exporter
            .export_file_by_attrs(&output, &drawing.document, &results)
            .with_context(|| format!("Failed to write {}", output.display()))?;
    } else {
        let result = cluster_with(&drawing.segments, &options)?;
        report.set_stats(result.stats.clone());
        exporter
            .export_file(&output, &drawing.document, &result)
            .with_context(|| format!("Failed to write {}", output.display()))?;
    }

    info!(
        "Wrote {} paths to {}",
        report.stats.output_path_count(),
        output.display()
    );
    Ok(report)
}

/// Entry point used by the binary.
pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    crate::init_logging(args.verbose)?;

    let report = execute(&args)?;
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
    }
    Ok(())
}
