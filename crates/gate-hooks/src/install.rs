// Rust guideline compliant 2026-10-19

//! Installation of the pre-commit shim into a repository's hooks directory.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Shell shim written to `.git/hooks/pre-commit`.
pub const PRE_COMMIT_SHIM: &str = "#!/bin/sh\n# Installed by gate.\nexec gate-pre-commit \"$@\"\n";

/// Installs the pre-commit shim for the repository enclosing `start`.
///
/// # Arguments
///
/// * `start` - Any directory inside the repository
/// * `force` - Overwrite an existing pre-commit hook
///
/// # Returns
///
/// The path of the installed hook.
///
/// # Errors
///
/// Returns an error if:
/// - `start` is not inside a repository
/// - A pre-commit hook already exists and `force` is false
/// - The hook file cannot be written
pub fn install_pre_commit(start: &Path, force: bool) -> Result<PathBuf> {
    let hooks_dir = gate_core::hooks_dir(start)?;
    let hook_path = hooks_dir.join("pre-commit");

    if hook_path.exists() && !force {
        anyhow::bail!(
            "Pre-commit hook already exists at {}. Use --force to overwrite.",
            hook_path.display()
        );
    }

    std::fs::create_dir_all(&hooks_dir)
        .with_context(|| format!("Failed to create {}", hooks_dir.display()))?;
    std::fs::write(&hook_path, PRE_COMMIT_SHIM)
        .with_context(|| format!("Failed to write {}", hook_path.display()))?;
    make_executable(&hook_path)?;

    info!(path = %hook_path.display(), "installed pre-commit hook");
    Ok(hook_path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut permissions = std::fs::metadata(path)?.permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(path, permissions)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
