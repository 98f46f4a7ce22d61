//! Installed directory layout under a prefix
//!
//! Mirrors the conventional package-manager tree: executables in `bin/`,
//! support files in `lib/`, shared data in `share/`, and one well-known
//! completion directory per shell.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding the default install prefix
pub const PREFIX_ENV: &str = "CLAUDE_NOTIFY_PREFIX";

/// Shells with a completion directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl Shell {
    pub const ALL: [Shell; 3] = [Shell::Bash, Shell::Zsh, Shell::Fish];
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
        };
        f.write_str(s)
    }
}

/// Root of an installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    root: PathBuf,
}

impl Prefix {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Prefix used when none is given: `~/.local`
    pub fn default_root() -> PathBuf {
        dirs::home_dir()
            .map(|home| home.join(".local"))
            .unwrap_or_else(|| PathBuf::from("/usr/local"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bin(&self) -> PathBuf {
        self.root.join("bin")
    }

    pub fn lib(&self) -> PathBuf {
        self.root.join("lib")
    }

    pub fn share(&self) -> PathBuf {
        self.root.join("share")
    }

    pub fn completion_dir(&self, shell: Shell) -> PathBuf {
        match shell {
            Shell::Bash => self.root.join("etc").join("bash_completion.d"),
            Shell::Zsh => self.share().join("zsh").join("site-functions"),
            Shell::Fish => self.share().join("fish").join("vendor_completions.d"),
        }
    }

    /// Directory holding install receipts for a formula
    pub fn receipt_dir(&self, formula: &str) -> PathBuf {
        self.root.join("var").join("db").join(formula)
    }
}
