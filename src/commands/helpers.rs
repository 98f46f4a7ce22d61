//! Shared setup for commands

use std::path::PathBuf;

use crate::error::Result;
use crate::formula::{Formula, builtin};
use crate::layout::Prefix;

/// The formula from `--formula`, or the built-in one
pub fn load_formula(path: Option<&PathBuf>) -> Result<Formula> {
    match path {
        Some(path) => Formula::load(path),
        None => Ok(builtin::claude_notify()),
    }
}

/// The prefix from `--prefix` / the environment, or the default
///
/// Relative prefixes are made absolute: the installed script embeds the lib path.
pub fn resolve_prefix(prefix: Option<PathBuf>) -> Prefix {
    let root = prefix.unwrap_or_else(Prefix::default_root);
    Prefix::new(std::path::absolute(&root).unwrap_or(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_when_no_path() {
        let formula = load_formula(None).unwrap();
        assert_eq!(formula.name, builtin::NAME);
    }

    #[test]
    fn test_relative_prefix_is_made_absolute() {
        let prefix = resolve_prefix(Some(PathBuf::from("local/prefix")));
        assert!(prefix.root().is_absolute());
        assert!(prefix.root().ends_with("local/prefix"));
    }

    #[test]
    fn test_explicit_prefix_wins() {
        let prefix = resolve_prefix(Some(PathBuf::from("/opt/pkg")));
        assert_eq!(prefix.root(), std::path::Path::new("/opt/pkg"));
    }
}
