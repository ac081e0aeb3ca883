// Rust guideline compliant 2026-10-19

//! Git pre-commit hook entry point for Gate.
//!
//! Takes no arguments. Exits non-zero, blocking the commit, if any check fails.

fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let hook = gate_hooks::PreCommit::prepare(&cwd, None)?;
    gate_hooks::init_tracing(&hook.config().log_level)?;
    hook.run()?;
    Ok(())
}
