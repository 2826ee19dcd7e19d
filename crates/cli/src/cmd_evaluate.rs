// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `perfbench evaluate` command implementation.

use termcolor::StandardStream;

use perfbench::cli::{Cli, EvaluateArgs};
use perfbench::error::{EvaluateError, ExitCode};
use perfbench::evaluate;

/// Run the evaluate command.
///
/// Missing inputs are reported on stderr and exit 1; a malformed record is
/// returned as an error.
pub fn run(_cli: &Cli, args: &EvaluateArgs) -> anyhow::Result<ExitCode> {
    let choice = args.color.resolve(args.no_color);
    let mut stdout = StandardStream::stdout(choice);

    match evaluate::run(&args.reference, &args.candidate, &mut stdout) {
        Ok(comparison) if comparison.passed() => Ok(ExitCode::Success),
        Ok(_) => Ok(ExitCode::Failed),
        Err(e) => {
            if let Some(err) = e.downcast_ref::<EvaluateError>()
                && err.exit_code() == ExitCode::Failed
            {
                eprintln!("Error: {}", err);
                return Ok(ExitCode::Failed);
            }
            Err(e)
        }
    }
}
