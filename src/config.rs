//! Configuration file support for deptree.
//!
//! Provides YAML-based configuration through `deptree.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::{IndentMode, OutputFormat};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "deptree.config.yml";

/// Top-level configuration file schema.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub configuration: Option<String>,
    pub lossless: Option<bool>,
    pub strict: Option<bool>,
    pub indent: Option<String>,
    pub indent_width: Option<usize>,
    pub expand_references: Option<bool>,
    pub path_limit: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// `format` as a validated enum value.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|value| {
                OutputFormat::from_str(value).map_err(|e| {
                    anyhow::anyhow!(
                        "Invalid config: {}\n\n💡 Hint: Use one of: nested, flat, tree.",
                        e
                    )
                })
            })
            .transpose()
    }

    /// `indent` as a validated enum value.
    pub fn indent_mode(&self) -> Result<Option<IndentMode>> {
        self.indent
            .as_deref()
            .map(|value| {
                IndentMode::from_str(value).map_err(|e| {
                    anyhow::anyhow!(
                        "Invalid config: {}\n\n💡 Hint: Use one of: bars, columns.",
                        e
                    )
                })
            })
            .transpose()
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
    config.indent_mode()?;

    if config.indent_width == Some(0) {
        bail!(
            "Invalid config: indent_width must be at least 1.\n\n\
             💡 Hint: Gradle indents each level by 5 columns."
        );
    }

    if config.path_limit == Some(0) {
        bail!(
            "Invalid config: path_limit must be at least 1.\n\n\
             💡 Hint: Remove the field to use the default limit."
        );
    }

    if let Some(ref name) = config.configuration {
        if name.trim().is_empty() {
            bail!(
                "Invalid config: configuration must not be empty.\n\n\
                 💡 Hint: Use a section name such as \"compileClasspath\", or remove the field."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
