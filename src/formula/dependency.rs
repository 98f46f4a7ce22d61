//! Dependency declarations for a formula
//!
//! Dependencies are reported, never resolved or installed.

use std::ffi::OsStr;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{FormulaError, Result};

/// How strongly a formula wants a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    #[default]
    Required,
    Recommended,
    Optional,
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DependencyKind::Required => "required",
            DependencyKind::Recommended => "recommended",
            DependencyKind::Optional => "optional",
        };
        f.write_str(s)
    }
}

/// A dependency declaration in a formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Executable name of the dependency
    pub name: String,

    #[serde(default)]
    pub kind: DependencyKind,
}

impl Dependency {
    pub fn recommended(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: DependencyKind::Recommended,
        }
    }

    /// Validate dependency
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FormulaError::FormulaInvalid {
                message: "Dependency name cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Locate the dependency's executable on `PATH`
    pub fn find(&self) -> Option<PathBuf> {
        which::which(&self.name).ok()
    }

    /// Locate the dependency's executable on a `PATH`-style search list
    pub fn find_in(&self, search_path: impl AsRef<OsStr>) -> Option<PathBuf> {
        let cwd = std::env::current_dir().unwrap_or_default();
        which::which_in(&self.name, Some(search_path), cwd).ok()
    }
}
