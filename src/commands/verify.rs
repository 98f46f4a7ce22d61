//! Test command implementation: runs the smoke checks

use console::style;

use crate::error::{FormulaError, Result};
use crate::formula::Formula;
use crate::layout::Prefix;
use crate::operations::smoke::run_checks;

/// Run the formula's smoke checks against the prefix
pub fn run(formula: &Formula, prefix: &Prefix) -> Result<()> {
    let results = run_checks(formula, prefix);

    for result in &results {
        let line = result.check.display();
        if result.passed() {
            println!("{} {}", style("✓").green(), line);
        } else {
            let reason = match (&result.error, result.code) {
                (Some(error), _) => error.clone(),
                (None, Some(code)) => format!("exit status {code}"),
                (None, None) => "terminated by signal".to_string(),
            };
            println!("{} {} ({})", style("✗").red(), line, reason);
        }
    }

    let failed = results.iter().filter(|r| !r.passed()).count();
    if failed > 0 {
        return Err(FormulaError::SmokeTestFailed {
            failed,
            total: results.len(),
        });
    }

    Ok(())
}
