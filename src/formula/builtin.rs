//! The `claude-notify` formula

use std::collections::BTreeMap;

use super::{Dependency, Formula, InstallSpec, SmokeCheck};
use crate::layout::Shell;

pub const NAME: &str = "claude-notify";

const HOMEPAGE: &str = "https://github.com/mylee04/claude-notify";

/// Expression the release script uses to find its lib directory next to a checkout
pub const RELATIVE_LIB_EXPR: &str = r#"$(dirname "$SCRIPT_DIR")/lib/claude-notify"#;

const CAVEATS: &str = "\
Claude-Notify installed successfully!

Quick start:
  claude-notify setup    # Run initial setup
  cn on                  # Enable notifications

Available commands:
  claude-notify (full commands)
  cn (global shortcuts)
  cnp (project shortcuts)

For more info: https://github.com/mylee04/claude-notify";

/// Build the `claude-notify` formula
pub fn claude_notify() -> Formula {
    let completions = BTreeMap::from([
        (Shell::Bash, "completions/bash/claude-notify".to_string()),
        (Shell::Zsh, "completions/zsh/_claude-notify".to_string()),
        (Shell::Fish, "completions/fish/claude-notify.fish".to_string()),
    ]);

    Formula {
        name: NAME.to_string(),
        desc: "Native OS notifications for Claude Code".to_string(),
        homepage: HOMEPAGE.to_string(),
        url: format!("{HOMEPAGE}/archive/v1.0.0.tar.gz"),
        version: None,
        // Filled in when a release archive is cut
        sha256: "PLACEHOLDER_SHA256".to_string(),
        license: "MIT".to_string(),
        dependencies: vec![Dependency::recommended("terminal-notifier")],
        install: InstallSpec {
            bin: "bin/claude-notify".to_string(),
            aliases: vec!["cn".to_string(), "cnp".to_string()],
            lib: "lib/claude-notify".to_string(),
            share: Some("share/claude-notify".to_string()),
            completions,
            rewrite: Some(RELATIVE_LIB_EXPR.to_string()),
        },
        caveats: Some(CAVEATS.to_string()),
        test: vec![
            SmokeCheck::new("claude-notify", &["version"]),
            SmokeCheck::new("cn", &["version"]),
            SmokeCheck::new("cnp", &["status"]),
        ],
    }
}
