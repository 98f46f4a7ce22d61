//! Install receipts
//!
//! A receipt is written after every successful install and records what the
//! install created, so `uninstall` can remove exactly that.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FormulaError, Result};
use crate::layout::Prefix;

pub const RECEIPT_FILE: &str = "INSTALL_RECEIPT.json";

/// Algorithm tag on `executable_hash`
pub const DIGEST_PREFIX: &str = "blake3:";

/// Tagged BLAKE3 digest of an installed file, as stored in a receipt
pub fn file_digest(path: &Path) -> Result<String> {
    let read_error = |e: std::io::Error| FormulaError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    };
    let file = fs::File::open(path).map_err(read_error)?;
    let mut hasher = blake3::Hasher::new();
    hasher.update_reader(file).map_err(read_error)?;
    Ok(format!("{DIGEST_PREFIX}{}", hasher.finalize().to_hex()))
}

/// Something an install put on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InstalledArtifact {
    File { path: PathBuf },
    Directory { path: PathBuf },
    Symlink { path: PathBuf, target: PathBuf },
    /// In-place edit of an already recorded file
    Rewrite { path: PathBuf, pattern: String },
}

impl InstalledArtifact {
    pub fn path(&self) -> &Path {
        match self {
            InstalledArtifact::File { path }
            | InstalledArtifact::Directory { path }
            | InstalledArtifact::Symlink { path, .. }
            | InstalledArtifact::Rewrite { path, .. } => path,
        }
    }
}

/// Optional step whose source was absent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedStep {
    pub source: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallReceipt {
    pub formula: String,
    pub version: String,
    /// Unix seconds
    pub installed_at: u64,
    pub source: PathBuf,
    pub artifacts: Vec<InstalledArtifact>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedStep>,
    /// Hash of the installed main executable after rewriting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable_hash: Option<String>,
}

impl InstallReceipt {
    pub fn path(prefix: &Prefix, formula: &str) -> PathBuf {
        prefix.receipt_dir(formula).join(RECEIPT_FILE)
    }

    pub fn load(prefix: &Prefix, formula: &str) -> Result<Self> {
        let path = Self::path(prefix, formula);
        if !path.is_file() {
            return Err(FormulaError::ReceiptNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|e| FormulaError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| FormulaError::ReceiptParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Write the receipt, returning its path
    pub fn save(&self, prefix: &Prefix) -> Result<PathBuf> {
        let path = Self::path(prefix, &self.formula);
        let write_error = |p: &Path, e: std::io::Error| FormulaError::FileWriteFailed {
            path: p.display().to_string(),
            reason: e.to_string(),
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(|e| write_error(&path, e))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> InstallReceipt {
        InstallReceipt {
            formula: "claude-notify".to_string(),
            version: "1.0.0".to_string(),
            installed_at: 1_700_000_000,
            source: PathBuf::from("/src"),
            artifacts: vec![
                InstalledArtifact::File {
                    path: PathBuf::from("/p/bin/claude-notify"),
                },
                InstalledArtifact::Symlink {
                    path: PathBuf::from("/p/bin/cn"),
                    target: PathBuf::from("claude-notify"),
                },
            ],
            skipped: vec![SkippedStep {
                source: PathBuf::from("share/claude-notify"),
            }],
            executable_hash: None,
        }
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let prefix = Prefix::new(temp.path());
        let receipt = sample();

        let path = receipt.save(&prefix).unwrap();
        assert!(path.ends_with("var/db/claude-notify/INSTALL_RECEIPT.json"));
        assert_eq!(InstallReceipt::load(&prefix, "claude-notify").unwrap(), receipt);
    }

    #[test]
    fn test_artifact_json_is_tagged() {
        let json = serde_json::to_string(&sample().artifacts[1]).unwrap();
        assert!(json.contains(r#""type":"symlink""#));
    }

    #[test]
    fn test_load_missing_receipt() {
        let temp = TempDir::new().unwrap();
        let err = InstallReceipt::load(&Prefix::new(temp.path()), "claude-notify").unwrap_err();
        assert!(matches!(err, FormulaError::ReceiptNotFound { .. }));
    }

    #[test]
    fn test_file_digest_tracks_rewritten_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("claude-notify");
        fs::write(&path, "LIB_DIR=\"$(dirname \"$SCRIPT_DIR\")/lib/claude-notify\"\n").unwrap();
        let before = file_digest(&path).unwrap();
        assert!(before.starts_with(DIGEST_PREFIX));
        assert_eq!(before, file_digest(&path).unwrap());

        fs::write(&path, "LIB_DIR=\"/opt/pkg/lib/claude-notify\"\n").unwrap();
        assert_ne!(before, file_digest(&path).unwrap());
    }

    #[test]
    fn test_file_digest_of_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = file_digest(&temp.path().join("claude-notify")).unwrap_err();
        assert!(matches!(err, FormulaError::FileReadFailed { .. }));
    }

    #[test]
    fn test_load_corrupt_receipt() {
        let temp = TempDir::new().unwrap();
        let prefix = Prefix::new(temp.path());
        let path = InstallReceipt::path(&prefix, "claude-notify");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{").unwrap();

        let err = InstallReceipt::load(&prefix, "claude-notify").unwrap_err();
        assert!(matches!(err, FormulaError::ReceiptParseFailed { .. }));
    }
}
