//! Formula definitions
//!
//! A formula is the immutable description of one package: its metadata,
//! the dependencies it would like on the system, the layout of its source
//! tree, the post-install message and the smoke checks that verify an
//! install. The built-in `claude-notify` formula lives in [`builtin`]; other
//! formulas can be loaded from YAML with [`Formula::load`].

pub mod builtin;
pub mod dependency;

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use dependency::{Dependency, DependencyKind};

use crate::error::{FormulaError, Result};
use crate::layout::Shell;

/// Package metadata plus its install manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formula {
    pub name: String,
    pub desc: String,
    pub homepage: String,

    /// Source archive URL
    pub url: String,

    /// Explicit version; derived from `url` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    pub sha256: String,
    pub license: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,

    pub install: InstallSpec,

    /// Message shown after a successful install
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caveats: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test: Vec<SmokeCheck>,
}

/// Where things live in the source tree, relative to its root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallSpec {
    /// Main executable, installed into `bin/`
    pub bin: String,

    /// Extra command names symlinked to the main executable
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Support directory, installed into `lib/`
    pub lib: String,

    /// Optional shared-data directory, installed into `share/` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share: Option<String>,

    /// Optional completion script per shell
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub completions: BTreeMap<Shell, String>,

    /// Literal text in the main executable replaced by the installed lib path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewrite: Option<String>,
}

/// One command run against the installed prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokeCheck {
    /// Name of an installed executable or alias
    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,
}

impl SmokeCheck {
    pub fn new(command: &str, args: &[&str]) -> Self {
        Self {
            command: command.to_string(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    /// Command line as typed by a user
    pub fn display(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Formula {
    /// Load and validate a formula from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| FormulaError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let formula = Self::from_yaml(&content).map_err(|e| match e {
            FormulaError::FormulaParseFailed { reason, .. } => FormulaError::FormulaParseFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })?;
        tracing::debug!(name = %formula.name, path = %path.display(), "loaded formula");
        Ok(formula)
    }

    /// Parse and validate a formula from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let formula: Formula =
            serde_yaml::from_str(content).map_err(|e| FormulaError::FormulaParseFailed {
                path: "<inline>".to_string(),
                reason: e.to_string(),
            })?;
        formula.validate()?;
        Ok(formula)
    }

    /// Version string, explicit or taken from the archive name
    pub fn version(&self) -> String {
        self.version
            .clone()
            .or_else(|| version_from_url(&self.url))
            .unwrap_or_else(|| "HEAD".to_string())
    }

    /// File name of the main executable
    pub fn executable_name(&self) -> &str {
        file_name(&self.install.bin)
    }

    /// Directory name the support files end up under in `lib/`
    pub fn lib_dir_name(&self) -> &str {
        file_name(&self.install.lib)
    }

    /// Every command name the install puts into `bin/`
    pub fn entry_points(&self) -> Vec<&str> {
        std::iter::once(self.executable_name())
            .chain(self.install.aliases.iter().map(String::as_str))
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        let invalid =
            |message: String| -> Result<()> { Err(FormulaError::FormulaInvalid { message }) };

        if self.name.trim().is_empty() {
            return invalid("Formula name cannot be empty".to_string());
        }
        if self.executable_name().is_empty() {
            return invalid(format!("Formula '{}' has no executable path", self.name));
        }
        if self.lib_dir_name().is_empty() {
            return invalid(format!("Formula '{}' has no library path", self.name));
        }

        if let Some(alias) = self
            .install
            .aliases
            .iter()
            .find(|a| a.is_empty() || a.contains('/') || a.contains('\\'))
        {
            return invalid(format!("Invalid alias name: '{alias}'"));
        }

        let mut seen = HashSet::new();
        for name in self.entry_points() {
            if !seen.insert(name) {
                return invalid(format!("Duplicate command name: '{name}'"));
            }
        }

        for dep in &self.dependencies {
            dep.validate()?;
        }

        for check in &self.test {
            if !seen.contains(check.command.as_str()) {
                return invalid(format!(
                    "Smoke check runs '{}', which the formula does not install",
                    check.command
                ));
            }
        }

        Ok(())
    }
}

fn file_name(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}

/// Derive `1.0.0` from `.../archive/v1.0.0.tar.gz`
fn version_from_url(url: &str) -> Option<String> {
    let last = url.trim_end_matches('/').rsplit('/').next()?;
    let stem = [".tar.gz", ".tgz", ".tar.bz2", ".tar.xz", ".zip"]
        .iter()
        .find_map(|ext| last.strip_suffix(ext))?;
    let version = stem.strip_prefix('v').unwrap_or(stem);
    if version.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        Some(version.to_string())
    } else {
        None
    }
}
