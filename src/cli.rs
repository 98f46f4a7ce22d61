//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::layout::PREFIX_ENV;

/// claude-notify-formula - install recipe for claude-notify
///
/// Installs claude-notify from an unpacked release archive into a prefix.
#[derive(Parser, Debug)]
#[command(
    name = "claude-notify-formula",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install recipe for claude-notify",
    long_about = "Installs the claude-notify executable, its cn and cnp aliases, library files \
                  and shell completions from an unpacked release archive into a prefix.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  claude-notify-formula install --source ./claude-notify-1.0.0\n    \
                  claude-notify-formula test\n    \
                  claude-notify-formula uninstall -y\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/mylee04/claude-notify"
)]
pub struct Cli {
    /// Installation prefix (defaults to ~/.local)
    #[arg(long, short = 'p', global = true, env = PREFIX_ENV)]
    pub prefix: Option<PathBuf>,

    /// Load the formula from a YAML file instead of the built-in one
    #[arg(long, short = 'f', global = true, value_name = "FILE")]
    pub formula: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install from an unpacked source tree
    Install(InstallArgs),

    /// Remove an installed formula
    Uninstall(UninstallArgs),

    /// Run the post-install smoke checks
    Test,

    /// Show the post-install message
    Caveats,

    /// Show formula metadata and install manifest
    Info(InfoArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install from an unpacked archive:\n    claude-notify-formula install --source ./claude-notify-1.0.0\n\n\
                   Install into a custom prefix:\n    claude-notify-formula install --source . --prefix /opt/homebrew\n\n\
                   Show what would be installed:\n    claude-notify-formula install --source . --dry-run")]
pub struct InstallArgs {
    /// Root of the unpacked source tree
    #[arg(long, short = 's', default_value = ".")]
    pub source: PathBuf,

    /// Print the planned steps without touching the file system
    #[arg(long)]
    pub dry_run: bool,

    /// Do not print the post-install message
    #[arg(long)]
    pub no_caveats: bool,
}

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
pub struct UninstallArgs {
    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    claude-notify-formula completions --shell bash\n\n\
                  Generate zsh completions:\n    claude-notify-formula completions --shell zsh")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
