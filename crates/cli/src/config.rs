// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loaded from `specdoc.toml`.
//!
//! ```toml
//! version = 1
//!
//! [report]
//! grouping = "adjacent"   # or "label"
//! format = "text"         # or "json"
//! color = "auto"          # or "always" / "never"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::color::ColorMode;
use crate::document::Grouping;
use crate::error::{Error, Result};

/// Config file name looked up by [`crate::discovery::find_config`].
pub const CONFIG_FILE: &str = "specdoc.toml";

/// The only supported config version.
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: u32,
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self { version: CONFIG_VERSION, report: ReportConfig::default() }
    }
}

/// Report output settings. Command-line flags take precedence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub grouping: Grouping,
    pub format: OutputFormat,
    pub color: ColorMode,
}

const KNOWN_KEYS: &[&str] = &["version", "report"];
const KNOWN_REPORT_KEYS: &[&str] = &["grouping", "format", "color"];

/// Load config from `path`, logging a warning for each unrecognized key.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Parse config content. `path` is only used in errors and warnings.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let to_error = |source| Error::Config { path: path.to_path_buf(), source };

    let table: toml::Table = toml::from_str(content).map_err(to_error)?;
    for key in unknown_keys(&table) {
        tracing::warn!("{}: unrecognized config key `{}`", path.display(), key);
    }

    let config: Config = toml::from_str(content).map_err(to_error)?;
    if config.version != CONFIG_VERSION {
        return Err(Error::InvalidConfig {
            path: path.to_path_buf(),
            message: format!(
                "unsupported version {} (expected {})",
                config.version, CONFIG_VERSION
            ),
        });
    }
    Ok(config)
}

/// Dotted names of keys the config schema does not know about.
pub fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown: Vec<String> = table
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();
    if let Some(toml::Value::Table(report)) = table.get("report") {
        unknown.extend(
            report
                .keys()
                .filter(|key| !KNOWN_REPORT_KEYS.contains(&key.as_str()))
                .map(|key| format!("report.{key}")),
        );
    }
    unknown
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
