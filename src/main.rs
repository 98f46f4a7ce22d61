//! claude-notify-formula - install recipe for claude-notify
//!
//! Installs the claude-notify executable, its `cn` and `cnp` aliases, library
//! files and shell completions from an unpacked release archive into a
//! package prefix, and verifies the result.

use clap::Parser;

mod caveats;
mod cli;
mod commands;
mod error;
mod formula;
mod installer;
mod layout;
mod operations;
mod receipt;
mod recipe;
#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use error::Result;

/// Route `tracing` output to stderr; `RUST_LOG` overrides the level
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = match cli.command {
        // Completions describe this CLI, not a formula
        Commands::Completions(args) => return commands::completions::run(args),
        command => command,
    };

    let formula = commands::helpers::load_formula(cli.formula.as_ref())?;
    let prefix = commands::helpers::resolve_prefix(cli.prefix);

    match command {
        Commands::Install(args) => commands::install::run(&formula, &prefix, args),
        Commands::Uninstall(args) => commands::uninstall::run(&formula, &prefix, args),
        Commands::Test => commands::verify::run(&formula, &prefix),
        Commands::Caveats => commands::caveats::run(&formula),
        Commands::Info(args) => commands::info::run(&formula, &prefix, args),
        Commands::Version => commands::version::run(&formula),
        Commands::Completions(_) => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
