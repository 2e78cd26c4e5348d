//! `hdlconv.toml` configuration

use anyhow::{Context, Result};
use hc_lower::LowerOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "hdlconv.toml";

/// Tool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Lowering policy
    #[serde(default)]
    pub lower: LowerOptions,

    /// Reporting of skipped constructs
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Treat any skipped construct as a failure
    pub deny_unsupported: bool,

    /// Render each skipped construct, not only the summary
    pub verbose: bool,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Uses `explicit` when given, else `hdlconv.toml` in `dir`, else defaults
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::from_file(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
