// src/config.rs

//! Manages configuration: loading from TOML, applying defaults, and validation.

use crate::core::document::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::warn;

/// Settings that control how documents are parsed and paths are resolved.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// If true, a key-value range whose key token could not be found literally is
    /// reported as an error instead of being estimated.
    #[serde(default)]
    pub strict_key_match: bool,
    /// Maximum nesting depth of arrays and objects in a document.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Documents larger than this are rejected. `0` disables the check.
    #[serde(default)]
    pub max_document_bytes: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            strict_key_match: false,
            max_depth: default_max_depth(),
            max_document_bytes: 0,
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// Settings for how the command-line tool prints results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

/// A raw representation of the config file before validation.
#[derive(Deserialize)]
struct RawConfig {
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default)]
    resolver: ResolverConfig,
    #[serde(default)]
    output: OutputConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Represents the final, validated configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            resolver: ResolverConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new `Config` instance by reading and parsing a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{path}'"))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to load config from '{path}'"))
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let raw_config: RawConfig =
            toml::from_str(contents).context("Failed to parse TOML configuration")?;

        let config = Config {
            log_level: raw_config.log_level,
            resolver: raw_config.resolver,
            output: raw_config.output,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration to ensure logical consistency.
    fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(anyhow!("log_level cannot be empty"));
        }
        if self.resolver.max_depth == 0 {
            return Err(anyhow!("resolver.max_depth cannot be 0"));
        }
        if self.resolver.max_depth > MAX_DEPTH_LIMIT {
            return Err(anyhow!(
                "resolver.max_depth cannot exceed {}, got {}",
                MAX_DEPTH_LIMIT,
                self.resolver.max_depth
            ));
        }

        let limit = self.resolver.max_document_bytes;
        if limit > 0 && limit < 1024 {
            warn!(
                "low resolver.max_document_bytes setting: {} bytes. Most documents will be rejected.",
                limit
            );
        }
        if self.resolver.strict_key_match {
            warn!(
                "resolver.strict_key_match is enabled. Keys containing escape sequences will fail to resolve."
            );
        }
        Ok(())
    }
}
