//! # Pathweave
//!
//! Joins fragmented SVG stroke paths into continuous chains by endpoint
//! proximity. PDF-to-SVG converters often emit every line of a drawing as
//! its own `<path>`; Pathweave stitches touching fragments back together so
//! plotters and cutters trace each outline in one pass.
//!
//! ## Architecture
//!
//! Pathweave is organized as a workspace with multiple crates:
//!
//! 1. **pathweave-core** - Geometry, segment/chain/result model, error types
//! 2. **pathweave-cluster** - Path data parsing, spatial index, adjacency
//!    graph, chain ordering and merging
//! 3. **pathweave-svg** - SVG fragment import and clustered SVG export
//! 4. **pathweave-settings** - Configuration files and validation
//! 5. **pathweave** - Command-line front end that ties the crates together

pub mod cli;
pub mod report;

pub use pathweave_cluster::{
    cluster, cluster_by_attrs, cluster_by_attrs_with, cluster_with, ClusterOptions,
    MixedAttrsPolicy, DEFAULT_TOLERANCE,
};
pub use pathweave_core::{
    ClusterResult, ClusterStats, Error, PathChain, PathSegment, Point, Result, VisualAttrs,
};
pub use pathweave_settings::{Config, ConfigOverrides};
pub use pathweave_svg::{DocumentInfo, SvgExporter, SvgImporter};
pub use report::{GroupReport, RunReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Maps `-v` occurrences to a default filter level.
pub fn log_level(verbosity: u8) -> tracing::Level {
    match verbosity {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout for the run report
/// - RUST_LOG environment variable support, falling back to `verbosity`
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbosity).to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(verbosity > 1);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
