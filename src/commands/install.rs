//! Install command implementation

use console::style;

use crate::cli::InstallArgs;
use crate::error::Result;
use crate::formula::{DependencyKind, Formula};
use crate::installer::Installer;
use crate::layout::Prefix;
use crate::receipt::InstallReceipt;
use crate::recipe::InstallStep;

/// Run install command
pub fn run(formula: &Formula, prefix: &Prefix, args: InstallArgs) -> Result<()> {
    let installer = Installer::new(formula, prefix, &args.source)?;

    if args.dry_run {
        print_plan(&installer, &args);
        return Ok(());
    }

    println!(
        "Installing {} {} into {}",
        style(&formula.name).bold(),
        formula.version(),
        prefix.root().display()
    );

    let receipt = installer.run()?;
    print_summary(&receipt);
    warn_missing_dependencies(formula, prefix);

    if !args.no_caveats {
        crate::caveats::print(formula);
    }

    Ok(())
}

fn print_plan(installer: &Installer<'_>, args: &InstallArgs) {
    println!("Would run:");
    for step in installer.recipe().steps() {
        let note = match step {
            InstallStep::RequiredCopy(_) if !step.source_present(&args.source) => {
                format!(" {}", style("(missing)").red())
            }
            InstallStep::OptionalCopy(_) if !step.source_present(&args.source) => {
                format!(" {}", style("(absent, skipped)").dim())
            }
            _ => String::new(),
        };
        println!("  {:<8} {}{}", style(step.kind()).cyan(), step, note);
    }
}

fn print_summary(receipt: &InstallReceipt) {
    println!(
        "{} {} file system entries installed",
        style("✓").green(),
        receipt.artifacts.len()
    );
    for skipped in &receipt.skipped {
        println!("  {} {}", style("skipped").dim(), skipped.source.display());
    }
}

/// Dependencies installed into the same prefix count even when its `bin/`
/// is not on `PATH`
fn warn_missing_dependencies(formula: &Formula, prefix: &Prefix) {
    let prefix_bin = prefix.bin();
    for dep in &formula.dependencies {
        if dep.kind == DependencyKind::Optional
            || dep.find().is_some()
            || dep.find_in(&prefix_bin).is_some()
        {
            continue;
        }
        tracing::debug!(dependency = %dep.name, kind = %dep.kind, "dependency not on PATH");
        println!(
            "{} {} dependency '{}' was not found on PATH",
            style("Warning:").yellow().bold(),
            dep.kind,
            dep.name
        );
    }
}
