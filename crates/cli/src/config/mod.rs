// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing.
//!
//! `perfbench.toml` is optional. Every key has a default, and an absent file
//! behaves exactly like an empty one.

pub mod defaults;

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Supported config schema version.
pub const CONFIG_VERSION: u32 = 1;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema version (must be 1 when present).
    #[serde(default = "Config::default_version")]
    pub version: u32,

    /// Settings for `perfbench compute`.
    #[serde(default)]
    pub compute: ComputeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            compute: ComputeConfig::default(),
        }
    }
}

impl Config {
    fn default_version() -> u32 {
        CONFIG_VERSION
    }
}

/// Settings for the compute command.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComputeConfig {
    /// Simulated run duration in seconds.
    #[serde(default = "ComputeConfig::default_delay_secs")]
    pub delay_secs: u64,

    /// Score written to the record.
    #[serde(default = "ComputeConfig::default_performance")]
    pub performance: f64,

    /// Output path, relative to the working directory.
    #[serde(default = "ComputeConfig::default_output")]
    pub output: PathBuf,

    /// Look up the current git revision.
    #[serde(default = "ComputeConfig::default_git")]
    pub git: bool,
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self {
            delay_secs: Self::default_delay_secs(),
            performance: Self::default_performance(),
            output: Self::default_output(),
            git: Self::default_git(),
        }
    }
}

impl ComputeConfig {
    pub(crate) fn default_delay_secs() -> u64 {
        defaults::compute::DELAY_SECS
    }

    pub(crate) fn default_performance() -> f64 {
        defaults::compute::PERFORMANCE
    }

    pub(crate) fn default_output() -> PathBuf {
        PathBuf::from(defaults::compute::OUTPUT)
    }

    pub(crate) fn default_git() -> bool {
        true
    }
}

/// Parse config from TOML text.
pub fn parse(content: &str, path: &Path) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;

    if config.version != CONFIG_VERSION {
        anyhow::bail!(
            "unsupported config version {} in {} (expected {})",
            config.version,
            path.display(),
            CONFIG_VERSION
        );
    }

    Ok(config)
}

/// Load config from a file.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Resolve the config for a command.
///
/// An explicit path must exist. Otherwise the nearest `perfbench.toml` from
/// `cwd` up to the git root is used, falling back to defaults.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) };
        return load(&path);
    }

    match crate::discovery::find_config(cwd) {
        Some(path) => load(&path),
        None => {
            tracing::debug!("no perfbench.toml found, using defaults");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
