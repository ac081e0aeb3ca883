// Rust guideline compliant 2026-10-19

//! Implementation of the `gate run` command.

use super::GlobalOptions;
use anyhow::Result;

/// Runs the pre-commit checks, exactly as the installed hook would.
///
/// # Errors
///
/// Returns an error if the repository cannot be resolved or any check fails.
pub fn execute(options: &GlobalOptions) -> Result<()> {
    let report = options.prepare()?.run()?;
    eprintln!(
        "gate: {} manifest(s), {} check(s) passed",
        report.manifests, report.checks
    );
    Ok(())
}
