// Rust guideline compliant 2026-10-19

//! Repository root discovery.

use crate::{Error, Result};
use git2::{ErrorCode, Repository};
use std::path::{Path, PathBuf};

/// Resolves the top-level working directory of the enclosing repository.
pub trait RootLocator {
    /// Returns the repository root for `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not inside a repository with a working tree.
    fn locate(&self, start: &Path) -> Result<PathBuf>;
}

/// Locates the repository root with libgit2 discovery.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitRootLocator;

impl RootLocator for GitRootLocator {
    fn locate(&self, start: &Path) -> Result<PathBuf> {
        let repo = discover(start)?;

        let workdir = repo.workdir().ok_or_else(|| Error::BareRepository {
            path: repo.path().to_path_buf(),
        })?;

        Ok(trim_trailing_separator(workdir))
    }
}

/// Returns the directory Git reads hooks from for the repository enclosing `start`.
///
/// `core.hooksPath` wins when set; a relative value is resolved against the
/// working tree (the common Git directory for bare repositories). Otherwise
/// hooks live in `hooks/` under the common Git directory, which linked
/// worktrees share with the main checkout.
///
/// # Errors
///
/// Returns an error if `start` is not inside a repository or its
/// configuration cannot be read.
pub fn hooks_dir(start: &Path) -> Result<PathBuf> {
    let repo = discover(start)?;
    match repo.config()?.get_path("core.hooksPath") {
        Ok(path) if path.is_absolute() => Ok(path),
        Ok(path) => {
            let base = repo.workdir().unwrap_or_else(|| repo.commondir());
            Ok(trim_trailing_separator(&base.join(path)))
        }
        Err(err) if err.code() == ErrorCode::NotFound => {
            Ok(trim_trailing_separator(&repo.commondir().join("hooks")))
        }
        Err(err) => Err(Error::Git(err)),
    }
}

fn discover(start: &Path) -> Result<Repository> {
    Repository::discover(start).map_err(|err| match err.code() {
        ErrorCode::NotFound => Error::NotARepository {
            path: start.to_path_buf(),
        },
        _ => Error::Git(err),
    })
}

// libgit2 reports the workdir with a trailing slash.
fn trim_trailing_separator(path: &Path) -> PathBuf {
    path.components().collect()
}
