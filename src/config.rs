//! Configuration file support for deptree.
//!
//! Provides YAML-based configuration through `deptree.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::dependency_tree::filters::{filter_by_name, DEFAULT_FILTER_NAMES};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "deptree.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    /// Snapshot filters in chain order; an empty list disables filtering.
    pub filters: Option<Vec<String>>,
    pub fail_on_unresolved: Option<bool>,
    pub show_hidden: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured format; `None` when the file does not set one.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        match &self.format {
            Some(format) => {
                let parsed = format
                    .parse::<OutputFormat>()
                    .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.output_format()?;

    if let Some(ref filters) = config.filters {
        for (i, name) in filters.iter().enumerate() {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: filters[{}] must not be empty.\n\n\
                     💡 Hint: Use one of: {}",
                    i,
                    DEFAULT_FILTER_NAMES.join(", ")
                );
            }
            filter_by_name(name).with_context(|| format!("Invalid config: filters[{}]", i))?;
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
