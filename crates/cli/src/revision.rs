// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort source revision lookup.
//!
//! Compute stamps each record with the commit id of the checked-out revision.
//! The lookup is optional: when git support is compiled out, disabled, or the
//! working directory is not inside a repository, the result is `None` and no
//! error reaches the caller.

use std::path::Path;

/// Source of the current revision identifier for a directory.
pub trait RevisionSource {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Commit id of the revision checked out at `dir` or an ancestor.
    fn head_revision(&self, dir: &Path) -> Option<String>;
}

/// Revision source that never finds anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRevision;

impl RevisionSource for NoRevision {
    fn name(&self) -> &'static str {
        "none"
    }

    fn head_revision(&self, _dir: &Path) -> Option<String> {
        None
    }
}

/// Revision source backed by libgit2.
///
/// Discovers the repository by walking up from the given directory.
#[cfg(feature = "git")]
#[derive(Debug, Default, Clone, Copy)]
pub struct GitRevision;

#[cfg(feature = "git")]
impl GitRevision {
    fn lookup(dir: &Path) -> Result<String, git2::Error> {
        let repo = git2::Repository::discover(dir)?;
        let commit = repo.head()?.peel_to_commit()?;
        Ok(commit.id().to_string())
    }
}

#[cfg(feature = "git")]
impl RevisionSource for GitRevision {
    fn name(&self) -> &'static str {
        "git"
    }

    fn head_revision(&self, dir: &Path) -> Option<String> {
        match Self::lookup(dir) {
            Ok(hash) => Some(hash),
            Err(e) => {
                tracing::debug!("revision lookup in {} failed: {}", dir.display(), e.message());
                None
            }
        }
    }
}

/// Pick the revision source available in this build.
///
/// Returns the null source when `enabled` is false or git support is compiled out.
pub fn detect(enabled: bool) -> Box<dyn RevisionSource> {
    if !enabled {
        return Box::new(NoRevision);
    }

    #[cfg(feature = "git")]
    {
        Box::new(GitRevision)
    }

    #[cfg(not(feature = "git"))]
    {
        Box::new(NoRevision)
    }
}

#[cfg(test)]
#[path = "revision_tests.rs"]
mod tests;
