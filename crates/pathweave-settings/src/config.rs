//! Configuration for Pathweave runs
//!
//! Supports JSON and TOML file formats; the default file lives in the
//! platform config directory.
//!
//! Configuration is organized into sections:
//! - Clustering (tolerance, per-style clustering, mixed-style policy)
//! - Import (white halo handling)
//! - Export (coordinate precision, output file suffix)

use crate::error::{SettingsError, SettingsResult};
use pathweave_cluster::{ClusterOptions, MixedAttrsPolicy, DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Clustering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterSettings {
    /// Maximum endpoint gap treated as a connection
    pub tolerance: f64,
    /// Cluster each stroke style separately
    pub by_attrs: bool,
    /// What to do with chains whose members differ in style
    pub mixed_attrs: MixedAttrsPolicy,
}

impl Default for ClusterSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            by_attrs: false,
            mixed_attrs: MixedAttrsPolicy::default(),
        }
    }
}

/// Import settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ImportSettings {
    /// Keep white-stroke fragments
    pub keep_white: bool,
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Decimal places for merged chains; unset keeps full precision
    pub precision: Option<usize>,
    /// Appended to the input file stem when no output path is given
    pub suffix: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            precision: None,
            suffix: "-clustered".to_string(),
        }
    }
}

/// Values given on the command line; `None` leaves the config value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub tolerance: Option<f64>,
    pub by_attrs: Option<bool>,
    pub mixed_attrs: Option<MixedAttrsPolicy>,
    pub keep_white: Option<bool>,
    pub precision: Option<usize>,
}

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub cluster: ClusterSettings,
    pub import: ImportSettings,
    pub export: ExportSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config_dir>/pathweave/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("pathweave").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads the default config file, or defaults when it does not exist.
    pub fn load_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.cluster_options()
            .validate()
            .map_err(|err| SettingsError::invalid("cluster.tolerance", err.to_string()))?;

        if self.export.suffix.is_empty() {
            return Err(SettingsError::invalid("export.suffix", "must not be empty"));
        }

        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(tolerance) = overrides.tolerance {
            self.cluster.tolerance = tolerance;
        }
        if let Some(by_attrs) = overrides.by_attrs {
            self.cluster.by_attrs = by_attrs;
        }
        if let Some(policy) = overrides.mixed_attrs {
            self.cluster.mixed_attrs = policy;
        }
        if let Some(keep_white) = overrides.keep_white {
            self.import.keep_white = keep_white;
        }
        if overrides.precision.is_some() {
            self.export.precision = overrides.precision;
        }
    }

    pub fn cluster_options(&self) -> ClusterOptions {
        ClusterOptions::new(self.cluster.tolerance).with_mixed_attrs(self.cluster.mixed_attrs)
    }

    /// Output file next to `input`: `drawing.svg` becomes
    /// `drawing-clustered.svg` with the default suffix.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        input.with_file_name(format!("{}{}.svg", stem, self.export.suffix))
    }
}
