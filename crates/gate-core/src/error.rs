// Rust guideline compliant 2026-10-19

//! Error types for the Gate core library.

use crate::check::CheckKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Gate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Gate operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Git operation error.
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    /// No repository encloses the starting directory.
    #[error("Not inside a Git repository: {}", path.display())]
    NotARepository {
        /// Directory the lookup started from.
        path: PathBuf,
    },

    /// The repository has no working directory to check.
    #[error("Repository at {} is bare and has no working tree", path.display())]
    BareRepository {
        /// Path of the repository's Git directory.
        path: PathBuf,
    },

    /// Directory traversal failed while discovering manifests.
    #[error("Failed to scan {}: {message}", path.display())]
    Walk {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying traversal error.
        message: String,
    },

    /// A check command could not be started.
    #[error("Failed to run `{program}` in {}: {source}", dir.display())]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Working directory of the attempted invocation.
        dir: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A check command exited unsuccessfully.
    #[error("{kind} check failed for {} ({})", manifest.display(), describe_exit(*code))]
    CheckFailed {
        /// Which check failed.
        kind: CheckKind,
        /// Manifest whose check failed.
        manifest: PathBuf,
        /// Exit code, or `None` when terminated by a signal.
        code: Option<i32>,
    },

    /// Configuration is missing, unreadable, or invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_failed_formatting() {
        let error = Error::CheckFailed {
            kind: CheckKind::Format,
            manifest: PathBuf::from("crates/a/Cargo.toml"),
            code: Some(1),
        };
        assert_eq!(
            error.to_string(),
            "format check failed for crates/a/Cargo.toml (exit code 1)"
        );
    }

    #[test]
    fn test_check_failed_by_signal() {
        let error = Error::CheckFailed {
            kind: CheckKind::Lint,
            manifest: PathBuf::from("Cargo.toml"),
            code: None,
        };
        assert!(error.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_not_a_repository_formatting() {
        let error = Error::NotARepository {
            path: PathBuf::from("/tmp/nowhere"),
        };
        assert_eq!(error.to_string(), "Not inside a Git repository: /tmp/nowhere");
    }
}
