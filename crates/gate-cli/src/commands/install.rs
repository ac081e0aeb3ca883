// Rust guideline compliant 2026-10-19

//! Implementation of the `gate install` command.

use super::GlobalOptions;
use anyhow::Result;

/// Installs the pre-commit shim into the current repository.
///
/// # Arguments
///
/// * `options` - Global CLI options
/// * `force` - Overwrite an existing pre-commit hook
///
/// # Errors
///
/// Returns an error if the current directory is not inside a repository, the
/// configuration is invalid, or a hook already exists and `force` is false.
pub fn execute(options: &GlobalOptions, force: bool) -> Result<()> {
    let hook = options.prepare()?;
    let path = gate_hooks::install_pre_commit(hook.root(), force)?;
    println!("Installed pre-commit hook at {}", path.display());
    Ok(())
}
