//! Uninstall command CLI wrapper
//!
//! Confirmation and output live here; removal is in operations/uninstall.rs.

use console::style;
use inquire::Confirm;

use crate::cli::UninstallArgs;
use crate::error::{FormulaError, Result};
use crate::formula::Formula;
use crate::layout::Prefix;
use crate::operations::uninstall::uninstall;
use crate::receipt::InstallReceipt;

fn confirm_uninstall(receipt: &InstallReceipt, prefix: &Prefix) -> Result<bool> {
    println!(
        "\n{} {} will be removed from {}",
        receipt.formula,
        receipt.version,
        prefix.root().display()
    );
    println!("  {} entries recorded in the install receipt", receipt.artifacts.len());
    println!();

    Confirm::new("Proceed with uninstall?")
        .with_default(true)
        .with_help_message("Press Enter to confirm, or 'n' to cancel")
        .prompt()
        .map_err(Into::into)
}

/// Run uninstall command
pub fn run(formula: &Formula, prefix: &Prefix, args: UninstallArgs) -> Result<()> {
    let receipt = InstallReceipt::load(prefix, &formula.name)?;

    if !args.yes && !confirm_uninstall(&receipt, prefix)? {
        return Err(FormulaError::Cancelled);
    }

    let report = uninstall(prefix, &formula.name)?;

    for path in &report.missing {
        println!("  {} {}", style("already gone").dim(), path.display());
    }
    println!(
        "{} Uninstalled {} ({} entries removed)",
        style("✓").green(),
        formula.name,
        report.removed.len()
    );

    Ok(())
}
