// Rust guideline compliant 2026-10-19

//! Implementation of the `gate list` command.
//!
//! Prints the manifests the hook would check, relative to the repository root.

use super::GlobalOptions;
use anyhow::Result;
use gate_core::discover_manifests;
use std::path::{Path, PathBuf};

/// Lists discovered manifests.
///
/// # Arguments
///
/// * `options` - Global CLI options
/// * `json` - Print a JSON array instead of one path per line
///
/// # Errors
///
/// Returns an error if the repository cannot be resolved or scanned.
pub fn execute(options: &GlobalOptions, json: bool) -> Result<()> {
    let hook = options.prepare()?;
    let manifests: Vec<PathBuf> = discover_manifests(hook.root(), hook.config())?
        .iter()
        .map(|m| m.relative_to(hook.root()))
        .collect();
    print!("{}", render(&manifests, json)?);
    Ok(())
}

/// Renders manifest paths as lines or as a JSON array.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(manifests: &[PathBuf], json: bool) -> Result<String> {
    if json {
        let paths: Vec<String> = manifests.iter().map(|p| display(p)).collect();
        return Ok(format!("{}\n", serde_json::to_string_pretty(&paths)?));
    }
    Ok(manifests
        .iter()
        .map(|p| format!("{}\n", display(p)))
        .collect())
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
