// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_compute;
mod cmd_evaluate;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use perfbench::cli::{Cli, Command};
use perfbench::error::ExitCode;

/// Environment variable holding the tracing filter.
const LOG_ENV: &str = "PERFBENCH_LOG";

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Compute(args) => cmd_compute::run(&cli, args),
        Command::Evaluate(args) => cmd_evaluate::run(&cli, args),
    };

    match result {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("perfbench: {:#}", e);
            ExitCode::InternalError.into()
        }
    }
}

/// Diagnostics go to stderr so stdout carries only the report.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
