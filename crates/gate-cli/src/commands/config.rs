// Rust guideline compliant 2026-10-19

//! Implementation of the `gate config` command.

use super::GlobalOptions;
use anyhow::Result;

/// Prints the effective configuration as TOML.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn execute(options: &GlobalOptions) -> Result<()> {
    let hook = options.prepare()?;
    print!("{}", hook.config().to_toml()?);
    Ok(())
}
