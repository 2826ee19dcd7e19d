// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result record file format.
//!
//! A record is written once by `perfbench compute` as a [`ResultRecord`] and
//! read back by `perfbench evaluate` as a [`Score`]. Only `performance`
//! matters to evaluation; the other fields are informational and never
//! validated on read.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EvaluateError;

/// Marker written to the `status` field of every computed record.
pub const STATUS_COMPLETED: &str = "completed";

/// A single benchmark result, as compute writes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Benchmark score (higher is better).
    pub performance: f64,

    /// Seconds since the Unix epoch, fractional.
    pub timestamp: f64,

    pub status: String,

    /// Commit id of the checked-out revision, if one could be found.
    pub git_hash: Option<String>,
}

impl ResultRecord {
    /// Build a completed record stamped with `at`.
    pub fn completed(performance: f64, at: DateTime<Utc>, git_hash: Option<String>) -> Self {
        Self {
            performance,
            timestamp: epoch_seconds(at),
            status: STATUS_COMPLETED.to_string(),
            git_hash,
        }
    }

    /// Save the record as pretty JSON, creating parent directories if needed.
    ///
    /// Overwrites any existing file at `path`.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

/// The part of a record evaluate reads.
///
/// Any JSON object is accepted; fields other than `performance` are ignored
/// whatever their type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Score {
    /// Absent reads as 0.
    #[serde(default)]
    pub performance: f64,
}

impl Score {
    /// Load the score from the record at `path`.
    pub fn load(path: &Path) -> Result<Self, EvaluateError> {
        let content = std::fs::read_to_string(path).map_err(|source| EvaluateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| EvaluateError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse the score from record JSON text.
    ///
    /// The top level must be an object; a non-numeric `performance` is an error.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content)?;
        serde_json::from_value(serde_json::Value::Object(object))
    }
}

/// Fractional seconds since the Unix epoch.
fn epoch_seconds(at: DateTime<Utc>) -> f64 {
    at.timestamp() as f64 + f64::from(at.timestamp_subsec_micros()) / 1_000_000.0
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
