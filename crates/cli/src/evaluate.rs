// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Candidate vs. reference evaluation.
//!
//! Loads two result records, computes the difference and percent change, and
//! decides pass/fail. A candidate passes when its performance is greater than
//! or equal to the reference.

use std::path::{Path, PathBuf};

use termcolor::WriteColor;

use crate::color::scheme;
use crate::error::EvaluateError;
use crate::record::Score;

/// Width of the report's horizontal rules.
const RULE_WIDTH: usize = 50;

/// Outcome of comparing a candidate score against a reference score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub reference: f64,
    pub candidate: f64,
    /// `candidate - reference`.
    pub difference: f64,
    /// `difference / reference * 100`, or 0 when the reference is 0.
    pub percent_change: f64,
}

impl Comparison {
    pub fn new(reference: f64, candidate: f64) -> Self {
        let difference = candidate - reference;
        let percent_change = if reference == 0.0 { 0.0 } else { difference / reference * 100.0 };
        Self {
            reference,
            candidate,
            difference,
            percent_change,
        }
    }

    /// Compare the scores of two records.
    pub fn of(reference: &Score, candidate: &Score) -> Self {
        Self::new(reference.performance, candidate.performance)
    }

    /// Ties pass.
    pub fn passed(&self) -> bool {
        self.candidate >= self.reference
    }
}

/// Load one side of the comparison, checking existence before parsing.
fn load_side(
    path: &Path,
    missing: fn(PathBuf) -> EvaluateError,
) -> Result<Score, EvaluateError> {
    if !path.is_file() {
        return Err(missing(path.to_path_buf()));
    }
    tracing::debug!("loading result record {}", path.display());
    Score::load(path)
}

/// Load the reference, then the candidate.
///
/// The reference is fully parsed before the candidate's existence is checked.
pub fn load_pair(
    reference: &Path,
    candidate: &Path,
) -> Result<(Score, Score), EvaluateError> {
    let reference = load_side(reference, EvaluateError::MissingReference)?;
    let candidate = load_side(candidate, EvaluateError::MissingCandidate)?;
    Ok((reference, candidate))
}

/// Write the preamble naming both inputs.
pub fn write_preamble(
    out: &mut dyn WriteColor,
    reference: &Path,
    candidate: &Path,
) -> std::io::Result<()> {
    writeln!(out, "Evaluating candidate against reference...")?;
    write!(out, "Reference: ")?;
    write_colored(out, &scheme::path(), &reference.display().to_string())?;
    writeln!(out)?;
    write!(out, "Candidate: ")?;
    write_colored(out, &scheme::path(), &candidate.display().to_string())?;
    writeln!(out)
}

/// Write the results table and the verdict line.
pub fn write_report(out: &mut dyn WriteColor, comparison: &Comparison) -> std::io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    write_colored(out, &scheme::heading(), "EVALUATION RESULTS")?;
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "Reference performance:  {:.4}", comparison.reference)?;
    writeln!(out, "Candidate performance:  {:.4}", comparison.candidate)?;
    writeln!(out, "Difference:             {:+.4}", comparison.difference)?;
    writeln!(out, "Percent change:         {:+.2}%", comparison.percent_change)?;
    writeln!(out, "{}", rule)?;

    if comparison.passed() {
        write_colored(
            out,
            &scheme::pass(),
            "✓ Candidate performance is better or equal to reference!",
        )?;
    } else {
        write_colored(out, &scheme::fail(), "✗ Candidate performance is worse than reference.")?;
    }
    writeln!(out)
}

/// Evaluate `candidate` against `reference`, writing the full report to `out`.
///
/// Missing or malformed inputs surface as [`EvaluateError`] inside the
/// returned error; nothing past the preamble is written in that case.
pub fn run(
    reference: &Path,
    candidate: &Path,
    out: &mut dyn WriteColor,
) -> anyhow::Result<Comparison> {
    write_preamble(out, reference, candidate)?;
    out.flush()?;

    let (ref_score, cand_score) = load_pair(reference, candidate)?;
    let comparison = Comparison::of(&ref_score, &cand_score);
    tracing::debug!(?comparison, "evaluated");

    write_report(out, &comparison)?;
    Ok(comparison)
}

fn write_colored(
    out: &mut dyn WriteColor,
    spec: &termcolor::ColorSpec,
    text: &str,
) -> std::io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{}", text)?;
    out.reset()
}

#[cfg(test)]
#[path = "evaluate_tests.rs"]
mod tests;
