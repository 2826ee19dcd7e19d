// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed; for evaluate, the candidate passed.
    Success = 0,
    /// Evaluate failed: missing input or the candidate underperformed.
    Failed = 1,
    /// Unexpected error (malformed record, I/O, bad config).
    InternalError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Failures while loading the records evaluate compares.
#[derive(Debug, thiserror::Error)]
pub enum EvaluateError {
    #[error("Reference file not found: {}", .0.display())]
    MissingReference(PathBuf),

    #[error("Candidate file not found: {}", .0.display())]
    MissingCandidate(PathBuf),

    #[error("failed to parse result record {}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EvaluateError {
    /// Exit code this error maps to.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::MissingReference(_) | Self::MissingCandidate(_) => ExitCode::Failed,
            Self::Malformed { .. } | Self::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
