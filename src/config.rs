//! Generator configuration module.
//!
//! Handles loading and validating `lookin.toml`. The file is optional: stock
//! defaults describe the standard checkout layout, where LookIn sits next to
//! the projects it documents:
//!
//! ```text
//! workspace/
//! ├── lookin/                  # root (working directory)
//! │   ├── lookin.toml          # optional overrides
//! │   ├── catalogs/*.json      # exported warehouse catalogs
//! │   └── docs/                # generated documents
//! ├── johanna/config.yaml      # chat service settings
//! └── jiramntr/                # main project (file counts)
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [paths]
//! catalogs = "catalogs"
//! output = "docs"
//! service_config = "../johanna/config.yaml"
//! project = "../jiramntr"
//! ```
//!
//! Relative paths resolve against the root. The file is sparse, so override
//! just the keys you need. Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "lookin.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `lookin.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    /// Input and output locations.
    pub paths: PathsConfig,
}

/// Where sources are read from and documents are written to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory of `*.json` catalog entries.
    pub catalogs: PathBuf,
    /// Output directory for generated documents.
    pub output: PathBuf,
    /// Chat service `key: value` settings file.
    pub service_config: PathBuf,
    /// Main project checkout, used for file counts.
    pub project: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            catalogs: PathBuf::from("catalogs"),
            output: PathBuf::from("docs"),
            service_config: PathBuf::from("../johanna/config.yaml"),
            project: PathBuf::from("../jiramntr"),
        }
    }
}

/// Paths joined onto the root, ready for I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub catalogs: PathBuf,
    pub output: PathBuf,
    pub service_config: PathBuf,
    pub project: PathBuf,
}

impl PathsConfig {
    /// Resolve every path against `root`. Absolute paths are kept as is.
    pub fn resolve(&self, root: &Path) -> ResolvedPaths {
        ResolvedPaths {
            catalogs: root.join(&self.catalogs),
            output: root.join(&self.output),
            service_config: root.join(&self.service_config),
            project: root.join(&self.project),
        }
    }
}

impl DocsConfig {
    /// Validate that required locations are set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paths.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "paths.output must not be empty".into(),
            ));
        }
        if self.paths.catalogs.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "paths.catalogs must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Stock defaults as a TOML value, the base every user file is merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(DocsConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `lookin.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file doesn't exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `lookin.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<DocsConfig, ConfigError> {
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(stock_defaults_value(), overlay),
        None => stock_defaults_value(),
    };
    let config: DocsConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}
