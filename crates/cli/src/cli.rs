// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;

/// A minimal benchmarking harness: compute a result, evaluate it against a baseline
#[derive(Parser)]
#[command(name = "perfbench")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the (simulated) benchmark and write a result record
    Compute(ComputeArgs),
    /// Compare a candidate result record against a reference
    Evaluate(EvaluateArgs),
}

#[derive(clap::Args, Default)]
pub struct ComputeArgs {
    /// Write the record here instead of performance_result.json
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Override the simulated run duration
    #[arg(long, value_name = "SECS")]
    pub delay_secs: Option<u64>,

    /// Skip the git revision lookup
    #[arg(long)]
    pub no_git: bool,
}

#[derive(clap::Args)]
pub struct EvaluateArgs {
    /// Reference (baseline) result record
    #[arg(value_name = "REF")]
    pub reference: PathBuf,

    /// Candidate result record
    #[arg(value_name = "CANDIDATE")]
    pub candidate: PathBuf,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
