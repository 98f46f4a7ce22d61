//! Version command implementation

use crate::error::Result;
use crate::formula::Formula;

/// Run version command
pub fn run(formula: &Formula) -> Result<()> {
    println!("claude-notify-formula {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Formula: {} {}", formula.name, formula.version());
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn rustc_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
