// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `perfbench compute` command implementation.

use perfbench::cli::{Cli, ComputeArgs};
use perfbench::compute::{self, ComputeOptions};
use perfbench::config;
use perfbench::error::ExitCode;
use perfbench::revision;

/// Run the compute command.
pub fn run(cli: &Cli, args: &ComputeArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;

    let options = ComputeOptions::new(&config.compute, args);
    let source = revision::detect(options.git);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    compute::run(&options, source.as_ref(), &cwd, &mut handle)?;

    Ok(ExitCode::Success)
}
