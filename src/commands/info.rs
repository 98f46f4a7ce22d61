//! Info command implementation

use console::Style;
use serde::Serialize;

use crate::cli::InfoArgs;
use crate::error::Result;
use crate::formula::Formula;
use crate::layout::Prefix;
use crate::recipe::{InstallStep, Recipe};

#[derive(Serialize)]
struct ManifestEntry {
    kind: &'static str,
    step: String,
}

#[derive(Serialize)]
struct InfoOutput<'a> {
    #[serde(flatten)]
    formula: &'a Formula,
    resolved_version: String,
    prefix: String,
    manifest: Vec<ManifestEntry>,
}

fn manifest(recipe: &Recipe) -> Vec<ManifestEntry> {
    recipe
        .steps()
        .iter()
        .map(|step| ManifestEntry {
            kind: step.kind(),
            step: step.to_string(),
        })
        .collect()
}

/// Run info command
pub fn run(formula: &Formula, prefix: &Prefix, args: InfoArgs) -> Result<()> {
    let recipe = Recipe::new(formula, prefix);

    if args.json {
        let output = InfoOutput {
            formula,
            resolved_version: formula.version(),
            prefix: prefix.root().display().to_string(),
            manifest: manifest(&recipe),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let bold = Style::new().bold();
    println!("{}: {} {}", bold.apply_to(&formula.name), formula.version(), formula.desc);
    println!("{}", formula.homepage);
    println!("{} {}", bold.apply_to("License:"), formula.license);
    println!("{} {}", bold.apply_to("From:"), formula.url);
    println!("{} {}", bold.apply_to("sha256:"), formula.sha256);

    if !formula.dependencies.is_empty() {
        println!("{}", bold.apply_to("Dependencies:"));
        for dep in &formula.dependencies {
            println!("  {} ({})", dep.name, dep.kind);
        }
    }

    println!("{}", bold.apply_to("Install manifest:"));
    for step in recipe.steps() {
        let marker = match step {
            InstallStep::OptionalCopy(_) => "optional",
            _ => "",
        };
        println!("  {:<8} {} {}", step.kind(), step, marker);
    }

    Ok(())
}
