//! CLI configuration: defaults, optionally overridden by a TOML file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use textcodec_core::Format;

/// Settings the command line falls back to.
///
/// ```toml
/// source = "TEXT"
/// destination = "MORSE"
/// default_text = "SOS"
/// json = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub source: Format,
    pub destination: Format,
    /// Text translated when the binary runs without a subcommand.
    pub default_text: String,
    pub json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            source: Format::Text,
            destination: Format::Binary,
            default_text: "Hello, World!".to_string(),
            json: false,
        }
    }
}

impl CliConfig {
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("invalid config")
    }

    /// Load from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("in {}", path.display()))
    }
}
