//! Typed install-step descriptors

use std::fmt;
use std::path::{Path, PathBuf};

/// What a copy expects to find at its source path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Copy of one source-tree entry into an install directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopySpec {
    /// Path relative to the source root
    pub source: PathBuf,
    /// Directory the entry is copied into, keeping its file name
    pub dest_dir: PathBuf,
    pub entry: EntryKind,
}

impl CopySpec {
    pub fn file(source: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest_dir: dest_dir.into(),
            entry: EntryKind::File,
        }
    }

    pub fn dir(source: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest_dir: dest_dir.into(),
            entry: EntryKind::Directory,
        }
    }

    /// Whether the source exists under `source_root` as the expected kind
    pub fn present_in(&self, source_root: &Path) -> bool {
        let path = source_root.join(&self.source);
        match self.entry {
            EntryKind::File => path.is_file(),
            EntryKind::Directory => path.is_dir(),
        }
    }

    /// Final installed path of the entry
    pub fn destination(&self) -> PathBuf {
        match self.source.file_name() {
            Some(name) => self.dest_dir.join(name),
            None => self.dest_dir.clone(),
        }
    }
}

/// One step of an install, executed in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStep {
    /// Source must exist; absence aborts the install
    RequiredCopy(CopySpec),

    /// Source is copied only when it exists
    OptionalCopy(CopySpec),

    /// `dir/name` becomes a symlink to `dir/target`
    Alias {
        dir: PathBuf,
        name: String,
        target: String,
    },

    /// Replace every occurrence of `pattern` in `file` with `replacement`
    Rewrite {
        file: PathBuf,
        pattern: String,
        replacement: String,
    },
}

impl InstallStep {
    pub fn kind(&self) -> &'static str {
        match self {
            InstallStep::RequiredCopy(_) => "copy",
            InstallStep::OptionalCopy(_) => "copy?",
            InstallStep::Alias { .. } => "alias",
            InstallStep::Rewrite { .. } => "rewrite",
        }
    }

    /// Whether the step's source is present under `source_root`
    ///
    /// Steps without a source-tree input are always applicable.
    pub fn source_present(&self, source_root: &Path) -> bool {
        match self {
            InstallStep::RequiredCopy(spec) | InstallStep::OptionalCopy(spec) => {
                spec.present_in(source_root)
            }
            InstallStep::Alias { .. } | InstallStep::Rewrite { .. } => true,
        }
    }
}

impl fmt::Display for InstallStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallStep::RequiredCopy(spec) | InstallStep::OptionalCopy(spec) => write!(
                f,
                "{} -> {}",
                spec.source.display(),
                spec.destination().display()
            ),
            InstallStep::Alias { dir, name, target } => {
                write!(f, "{} -> {}", dir.join(name).display(), target)
            }
            InstallStep::Rewrite {
                file,
                pattern,
                replacement,
            } => write!(f, "{}: '{}' => '{}'", file.display(), pattern, replacement),
        }
    }
}
