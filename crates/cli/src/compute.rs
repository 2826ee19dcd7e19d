// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated benchmark run.
//!
//! Blocks for the configured duration, then writes a completed
//! [`ResultRecord`] carrying the fixed score and the current revision.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;

use crate::cli::ComputeArgs;
use crate::config::ComputeConfig;
use crate::record::ResultRecord;
use crate::revision::RevisionSource;

/// Resolved settings for one compute run.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeOptions {
    pub delay: Duration,
    pub performance: f64,
    /// Output path as given; relative paths resolve against the working directory.
    pub output: PathBuf,
    pub git: bool,
}

impl ComputeOptions {
    /// Merge config with command-line overrides (flags win).
    pub fn new(config: &ComputeConfig, args: &ComputeArgs) -> Self {
        Self {
            delay: Duration::from_secs(args.delay_secs.unwrap_or(config.delay_secs)),
            performance: config.performance,
            output: args.output.clone().unwrap_or_else(|| config.output.clone()),
            git: config.git && !args.no_git,
        }
    }
}

impl Default for ComputeOptions {
    fn default() -> Self {
        Self::new(&ComputeConfig::default(), &ComputeArgs::default())
    }
}

/// Run the simulated benchmark and write the record.
///
/// Progress and summary lines go to `out`. Returns the record written.
pub fn run(
    options: &ComputeOptions,
    revision: &dyn RevisionSource,
    cwd: &Path,
    out: &mut dyn Write,
) -> anyhow::Result<ResultRecord> {
    writeln!(out, "Computing performance metrics...")?;
    out.flush()?;

    tracing::debug!("simulating run for {:?}", options.delay);
    std::thread::sleep(options.delay);

    let git_hash = revision.head_revision(cwd);
    tracing::debug!("revision source {} returned {:?}", revision.name(), git_hash);

    let record = ResultRecord::completed(options.performance, Utc::now(), git_hash);

    let path = cwd.join(&options.output);
    record.save(&path)?;

    writeln!(out, "Performance metrics saved to {}", options.output.display())?;
    writeln!(out, "Performance value: {:.4}", record.performance)?;
    if let Some(hash) = &record.git_hash {
        writeln!(out, "Git hash: {}", hash)?;
    }

    Ok(record)
}

#[cfg(test)]
#[path = "compute_tests.rs"]
mod tests;
