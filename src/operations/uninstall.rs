//! Removal of an installed formula
//!
//! Everything recorded in the install receipt is removed: alias symlinks
//! first, then files, then directories, then the receipt itself. Artifacts
//! that are already gone are reported and skipped.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FormulaError, Result};
use crate::layout::Prefix;
use crate::receipt::{InstallReceipt, InstalledArtifact};

#[derive(Debug, Default)]
pub struct UninstallReport {
    pub removed: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
}

/// Remove every artifact recorded for `formula` under `prefix`
pub fn uninstall(prefix: &Prefix, formula: &str) -> Result<UninstallReport> {
    let receipt = InstallReceipt::load(prefix, formula)?;
    let mut report = UninstallReport::default();

    let ordered = receipt
        .artifacts
        .iter()
        .filter(|a| matches!(a, InstalledArtifact::Symlink { .. }))
        .chain(
            receipt
                .artifacts
                .iter()
                .filter(|a| matches!(a, InstalledArtifact::File { .. })),
        )
        .chain(
            receipt
                .artifacts
                .iter()
                .filter(|a| matches!(a, InstalledArtifact::Directory { .. })),
        );

    for artifact in ordered {
        let path = artifact.path();
        if path.symlink_metadata().is_err() {
            tracing::warn!(path = %path.display(), "already removed");
            report.missing.push(path.to_path_buf());
            continue;
        }
        remove(artifact)?;
        tracing::debug!(path = %path.display(), "removed");
        report.removed.push(path.to_path_buf());
    }

    let receipt_path = InstallReceipt::path(prefix, formula);
    fs::remove_file(&receipt_path).map_err(|e| remove_error(&receipt_path, e))?;
    if let Some(dir) = receipt_path.parent() {
        // Only succeeds when empty
        let _ = fs::remove_dir(dir);
    }

    Ok(report)
}

fn remove(artifact: &InstalledArtifact) -> Result<()> {
    let path = artifact.path();
    let result = match artifact {
        InstalledArtifact::Directory { .. } => fs::remove_dir_all(path),
        InstalledArtifact::File { .. } | InstalledArtifact::Symlink { .. } => {
            fs::remove_file(path)
        }
        InstalledArtifact::Rewrite { .. } => Ok(()),
    };
    result.map_err(|e| remove_error(path, e))
}

fn remove_error(path: &Path, e: std::io::Error) -> FormulaError {
    FormulaError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}
