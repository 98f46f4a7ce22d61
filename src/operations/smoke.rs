//! Post-install verification
//!
//! Each check runs an installed command with fixed arguments. A check
//! passes when the command exits with status zero; its output is only
//! logged, never inspected.

use std::process::Command;

use crate::formula::{Formula, SmokeCheck};
use crate::layout::Prefix;

/// Result of one check
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub check: SmokeCheck,
    /// Exit code, `None` if the process could not be started or was killed
    pub code: Option<i32>,
    pub error: Option<String>,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.code == Some(0)
    }
}

/// Run every check of the formula against the prefix, in order
pub fn run_checks(formula: &Formula, prefix: &Prefix) -> Vec<CheckResult> {
    formula
        .test
        .iter()
        .map(|check| run_check(check, prefix))
        .collect()
}

fn run_check(check: &SmokeCheck, prefix: &Prefix) -> CheckResult {
    let program = prefix.bin().join(&check.command);
    tracing::debug!(program = %program.display(), args = ?check.args, "running smoke check");

    match Command::new(&program).args(&check.args).output() {
        Ok(output) => {
            tracing::debug!(
                status = %output.status,
                stdout = %String::from_utf8_lossy(&output.stdout).trim_end(),
                "smoke check finished"
            );
            CheckResult {
                check: check.clone(),
                code: output.status.code(),
                error: None,
            }
        }
        Err(e) => CheckResult {
            check: check.clone(),
            code: None,
            error: Some(format!("{}: {}", program.display(), e)),
        },
    }
}
