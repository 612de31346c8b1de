//! Best-effort execution of tool configuration commands.
//!
//! Failure policy: a step that fails to spawn or exits non-zero is
//! reported with a single generic notice and swallowed. One tool's
//! broken command must not stop the remaining steps, so errors stop
//! at this boundary and never reach the caller.

use std::process::Command;

use anyhow::{bail, Context, Result};

use crate::color::{color_enabled_stderr, color_enabled_stdout, log_error_stderr, paint};
use crate::tools::ConfigStep;

/// Outcome of one best-effort step. Informational only; callers keep
/// going either way.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    Failed,
}

fn try_run(step: &ConfigStep) -> Result<()> {
    let status = Command::new(step.program)
        .args(&step.args)
        .status()
        .with_context(|| format!("failed to spawn {}", step.program))?;
    if !status.success() {
        bail!("{} exited with {status}", step.program);
    }
    Ok(())
}

/// Run one configuration command with stdin/stdout/stderr inherited
/// from the terminal and wait for it, then print the confirmation
/// line naming the step description.
pub fn run_step(step: &ConfigStep) -> StepOutcome {
    match try_run(step) {
        Ok(()) => {
            let use_out = color_enabled_stdout();
            println!(
                "{} Successfully executed: {}",
                paint(use_out, "\x1b[32;1m", "ok:"),
                step.description
            );
            StepOutcome::Succeeded
        }
        // Spawn failure and non-zero exit get the same notice; the
        // tool's own output already went to the shared stderr.
        Err(_) => {
            let use_err = color_enabled_stderr();
            log_error_stderr(
                use_err,
                &format!(
                    "Failed to execute: {}. Ensure the command is available and correct.",
                    step.description
                ),
            );
            StepOutcome::Failed
        }
    }
}
