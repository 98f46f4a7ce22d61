//! Recipe execution
//!
//! The installer walks the recipe's steps in order and stops at the first
//! error. Nothing is rolled back: files copied before a failure stay where
//! they are, and no receipt is written. An optional step whose source is
//! absent is skipped without touching its destination.

pub mod file_ops;


use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{FormulaError, Result};
use crate::formula::Formula;
use crate::layout::Prefix;
use crate::receipt::{self, InstallReceipt, InstalledArtifact, SkippedStep};
use crate::recipe::{CopySpec, EntryKind, InstallStep, Recipe};

/// What running a single step did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Installed(InstalledArtifact),
    Skipped,
}

/// Executes a formula's recipe against an unpacked source tree
#[derive(Debug)]
pub struct Installer<'a> {
    formula: &'a Formula,
    prefix: &'a Prefix,
    source_root: PathBuf,
}

impl<'a> Installer<'a> {
    pub fn new(formula: &'a Formula, prefix: &'a Prefix, source_root: &Path) -> Result<Self> {
        let not_found = || FormulaError::SourceNotFound {
            path: source_root.display().to_string(),
        };
        let source_root = dunce::canonicalize(source_root).map_err(|_| not_found())?;
        if !source_root.is_dir() {
            return Err(not_found());
        }

        Ok(Self {
            formula,
            prefix,
            source_root,
        })
    }

    pub fn recipe(&self) -> Recipe {
        Recipe::new(self.formula, self.prefix)
    }

    /// Run every step, then write and return the install receipt
    pub fn run(&self) -> Result<InstallReceipt> {
        let recipe = self.recipe();
        let mut artifacts = Vec::new();
        let mut skipped = Vec::new();

        tracing::info!(
            formula = %self.formula.name,
            prefix = %self.prefix.root().display(),
            steps = recipe.steps().len(),
            "installing"
        );

        for step in recipe.steps() {
            match self.execute(step)? {
                StepOutcome::Installed(artifact) => artifacts.push(artifact),
                StepOutcome::Skipped => {
                    if let InstallStep::OptionalCopy(spec) = step {
                        skipped.push(SkippedStep {
                            source: spec.source.clone(),
                        });
                    }
                }
            }
        }

        let executable = self.prefix.bin().join(self.formula.executable_name());
        let receipt = InstallReceipt {
            formula: self.formula.name.clone(),
            version: self.formula.version(),
            installed_at: unix_now(),
            source: self.source_root.clone(),
            artifacts,
            skipped,
            executable_hash: Some(receipt::file_digest(&executable)?),
        };
        let path = receipt.save(self.prefix)?;
        tracing::debug!(path = %path.display(), "wrote install receipt");

        Ok(receipt)
    }

    /// Execute one step
    pub fn execute(&self, step: &InstallStep) -> Result<StepOutcome> {
        tracing::debug!(kind = step.kind(), "{step}");

        match step {
            InstallStep::RequiredCopy(spec) => {
                if !step.source_present(&self.source_root) {
                    return Err(FormulaError::MissingRequired {
                        path: spec.source.display().to_string(),
                    });
                }
                self.copy(spec).map(StepOutcome::Installed)
            }
            InstallStep::OptionalCopy(spec) => {
                if !step.source_present(&self.source_root) {
                    tracing::debug!(source = %spec.source.display(), "optional source absent, skipping");
                    return Ok(StepOutcome::Skipped);
                }
                self.copy(spec).map(StepOutcome::Installed)
            }
            InstallStep::Alias { dir, name, target } => {
                let link = file_ops::install_symlink(dir, name, target)?;
                Ok(StepOutcome::Installed(InstalledArtifact::Symlink {
                    path: link,
                    target: PathBuf::from(target),
                }))
            }
            InstallStep::Rewrite {
                file,
                pattern,
                replacement,
            } => {
                let count = file_ops::rewrite_file(file, pattern, replacement)?;
                tracing::debug!(count, file = %file.display(), "rewrote embedded path");
                Ok(StepOutcome::Installed(InstalledArtifact::Rewrite {
                    path: file.clone(),
                    pattern: pattern.clone(),
                }))
            }
        }
    }

    fn copy(&self, spec: &CopySpec) -> Result<InstalledArtifact> {
        let source = self.source_root.join(&spec.source);
        let destination = spec.destination();

        match spec.entry {
            EntryKind::Directory => {
                // The new tree replaces the old one; nothing from a previous release survives
                file_ops::remove_existing(&destination)?;
                let files = file_ops::copy_dir_recursive(&source, &destination)?;
                tracing::debug!(files = files.len(), dest = %destination.display(), "copied directory");
                Ok(InstalledArtifact::Directory { path: destination })
            }
            EntryKind::File => {
                file_ops::copy_file(&source, &destination)?;
                Ok(InstalledArtifact::File { path: destination })
            }
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
