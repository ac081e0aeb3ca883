// Rust guideline compliant 2026-10-19

//! Manifest discovery.

use crate::{Config, Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A discovered project manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    path: PathBuf,
}

impl Manifest {
    /// Wraps a manifest path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path to the manifest file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the manifest; checks run here.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Manifest path relative to `root`, or the full path if it lies outside.
    #[must_use]
    pub fn relative_to(&self, root: &Path) -> PathBuf {
        self.path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| self.path.clone())
    }
}

/// Recursively finds every regular file named `config.manifest_name` under `root`.
///
/// Symlinks are not followed. Directories whose name appears in
/// `config.exclude` are skipped entirely. Entries are visited in file name
/// order within each directory, so repeated scans of an unchanged tree yield
/// the same sequence.
///
/// # Errors
///
/// Returns an error if any directory under `root` cannot be read.
pub fn discover_manifests(root: &Path, config: &Config) -> Result<Vec<Manifest>> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !config
                    .exclude
                    .iter()
                    .any(|name| entry.file_name() == name.as_str())
        });

    let mut manifests = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| Error::Walk {
            path: err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            message: err.to_string(),
        })?;
        if entry.file_type().is_file() && entry.file_name() == config.manifest_name.as_str() {
            debug!(path = %entry.path().display(), "discovered manifest");
            manifests.push(Manifest::new(entry.into_path()));
        }
    }
    Ok(manifests)
}
