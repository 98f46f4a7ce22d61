//! File operations backing the install steps
//!
//! - Copying files and directory trees into install directories
//! - Creating alias symlinks
//! - Literal text replacement through a sibling temp file

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::error::{FormulaError, Result};

fn file_read_error(path: &Path, e: impl ToString) -> FormulaError {
    FormulaError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn file_write_error(path: &Path, e: impl ToString) -> FormulaError {
    FormulaError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Ensure a directory exists
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| file_write_error(path, e))
}

/// Remove whatever sits at `path`: a directory tree, a file or a link
pub fn remove_existing(path: &Path) -> Result<()> {
    let Ok(meta) = path.symlink_metadata() else {
        return Ok(());
    };
    let removed = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|e| file_write_error(path, e))
}

/// Copy a single file to `target`, keeping its permission bits
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        ensure_dir(parent)?;
    }
    // fs::copy would write through a stale alias or fail on a read-only file
    if target.symlink_metadata().is_ok_and(|m| !m.is_dir()) {
        fs::remove_file(target).map_err(|e| file_write_error(target, e))?;
    }
    fs::copy(source, target)
        .map(|_| ())
        .map_err(|e| file_write_error(target, e))
}

/// Copy a directory tree, returning every file and link written
///
/// Symlinks inside the tree are recreated as links with the same target.
pub fn copy_dir_recursive(source: &Path, target: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    ensure_dir(target)?;

    for entry in WalkDir::new(source).follow_links(false).min_depth(1) {
        let entry = entry.map_err(|e| file_read_error(source, e))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| file_read_error(entry.path(), e))?;
        let dest = target.join(relative);

        if entry.file_type().is_dir() {
            ensure_dir(&dest)?;
        } else if entry.file_type().is_symlink() {
            let link_target =
                fs::read_link(entry.path()).map_err(|e| file_read_error(entry.path(), e))?;
            copy_symlink(&link_target, &dest)?;
            written.push(dest);
        } else {
            copy_file(entry.path(), &dest)?;
            written.push(dest);
        }
    }

    Ok(written)
}

/// Create `dir/name` as a relative symlink to `target`
///
/// Anything already at `dir/name` is replaced.
pub fn install_symlink(dir: &Path, name: &str, target: &str) -> Result<PathBuf> {
    let link = dir.join(name);
    ensure_dir(dir)?;

    copy_symlink(Path::new(target), &link)?;
    Ok(link)
}

/// Point `link` at `target`, replacing any file or link already there
fn copy_symlink(target: &Path, link: &Path) -> Result<()> {
    if link.symlink_metadata().is_ok() {
        fs::remove_file(link).map_err(|e| file_write_error(link, e))?;
    }

    create_symlink(target, link).map_err(|e| FormulaError::SymlinkFailed {
        link: link.display().to_string(),
        target: target.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

/// Replace every occurrence of `pattern` in the file, returning the count
///
/// The new content goes to a temp file beside `path`, takes over its
/// permissions and is renamed over it, so a read-only script can be rewritten.
/// Finding no occurrence is an error: the file is left untouched.
pub fn rewrite_file(path: &Path, pattern: &str, replacement: &str) -> Result<usize> {
    let content = fs::read_to_string(path).map_err(|e| file_read_error(path, e))?;

    let count = content.matches(pattern).count();
    if count == 0 {
        return Err(FormulaError::RewriteNoMatch {
            path: path.display().to_string(),
            pattern: pattern.to_string(),
        });
    }

    let permissions = fs::metadata(path)
        .map_err(|e| file_read_error(path, e))?
        .permissions();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| file_write_error(dir, e))?;
    temp
        .write_all(content.replace(pattern, replacement).as_bytes())
        .map_err(|e| file_write_error(temp.path(), e))?;
    fs::set_permissions(temp.path(), permissions).map_err(|e| file_write_error(temp.path(), e))?;
    temp.persist(path).map_err(|e| file_write_error(path, e.error))?;

    Ok(count)
}
