//! Pathweave Settings Crate
//!
//! Handles run configuration: defaults, file persistence, validation and
//! command-line overrides.

pub mod config;
pub mod error;

pub use config::{ClusterSettings, Config, ConfigOverrides, ExportSettings, ImportSettings};
pub use error::{SettingsError, SettingsResult};
