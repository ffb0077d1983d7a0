//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shipping_core::ResolverConfig;

/// Config file names looked up from the working directory upwards.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shipquote.toml", ".shipquote.toml", "shipquote.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Resolver settings.
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Where the rate data lives.
    #[serde(default)]
    pub rates: RatesConfig,
}

/// Rate data location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatesConfig {
    /// JSON or TOML rate file, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse config text, JSON or TOML.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Check the config, returning every problem found.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if let Err(e) = self.resolver.validate() {
            problems.push(e.to_string());
        }
        if let Some(path) = &self.rates.path {
            if path.trim().is_empty() {
                problems.push("rates.path must not be empty".to_string());
            }
        }
        problems
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}

/// Generate a default shipquote.toml config file.
pub fn generate_default_config() -> String {
    r#"# shipquote configuration

[resolver]
# Used for the fallback rate only when the rate data is empty.
currency = "USD"
# Charged when no zone lists the destination postal code (minor units).
fallback_rate_cents = 300
fallback_estimate = "10-15 days"
# "annotate" prices methods on fallback quotes, "passthrough" leaves them bare.
fallback_methods = "annotate"

[rates]
path = "rates.json"
"#
    .to_string()
}
