//! Install recipe
//!
//! Turns a [`Formula`] and a [`Prefix`] into the ordered list of
//! [`InstallStep`]s the installer executes:
//!
//! 1. main executable into `bin/` (required)
//! 2. one symlink per alias next to it
//! 3. support directory into `lib/` (required)
//! 4. shared data into `share/` (optional)
//! 5. one completion script per shell (each optional, independently)
//! 6. rewrite of the relative lib path inside the installed executable

pub mod step;

pub use step::{CopySpec, EntryKind, InstallStep};

use crate::formula::Formula;
use crate::layout::Prefix;

/// Ordered steps for one formula and prefix
#[derive(Debug, Clone)]
pub struct Recipe {
    steps: Vec<InstallStep>,
}

impl Recipe {
    pub fn new(formula: &Formula, prefix: &Prefix) -> Self {
        let spec = &formula.install;
        let bin = prefix.bin();
        let executable = formula.executable_name().to_string();
        let mut steps = vec![InstallStep::RequiredCopy(CopySpec::file(&spec.bin, &bin))];

        steps.extend(spec.aliases.iter().map(|alias| InstallStep::Alias {
            dir: bin.clone(),
            name: alias.clone(),
            target: executable.clone(),
        }));

        steps.push(InstallStep::RequiredCopy(CopySpec::dir(
            &spec.lib,
            prefix.lib(),
        )));

        if let Some(share) = &spec.share {
            steps.push(InstallStep::OptionalCopy(CopySpec::dir(
                share,
                prefix.share(),
            )));
        }

        // BTreeMap iteration keeps bash, zsh, fish order
        steps.extend(spec.completions.iter().map(|(shell, source)| {
            InstallStep::OptionalCopy(CopySpec::file(source, prefix.completion_dir(*shell)))
        }));

        if let Some(pattern) = &spec.rewrite {
            let installed_lib = prefix.lib().join(formula.lib_dir_name());
            steps.push(InstallStep::Rewrite {
                file: bin.join(&executable),
                pattern: pattern.clone(),
                replacement: installed_lib.display().to_string(),
            });
        }

        Self { steps }
    }

    pub fn steps(&self) -> &[InstallStep] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::builtin;
    use std::path::PathBuf;

    fn recipe() -> Recipe {
        Recipe::new(&builtin::claude_notify(), &Prefix::new("/opt/pkg"))
    }

    #[test]
    fn test_step_order() {
        let kinds: Vec<&str> = recipe().steps().iter().map(InstallStep::kind).collect();
        assert_eq!(
            kinds,
            [
                "copy", "alias", "alias", "copy", "copy?", "copy?", "copy?", "copy?", "rewrite"
            ]
        );
    }

    #[test]
    fn test_aliases_target_main_executable() {
        let recipe = recipe();
        let aliases: Vec<(&str, &str)> = recipe
            .steps()
            .iter()
            .filter_map(|step| match step {
                InstallStep::Alias { name, target, .. } => Some((name.as_str(), target.as_str())),
                _ => None,
            })
            .collect();
        assert_eq!(aliases, [("cn", "claude-notify"), ("cnp", "claude-notify")]);
    }

    #[test]
    fn test_rewrite_points_at_installed_lib() {
        let recipe = recipe();
        let Some(InstallStep::Rewrite {
            file,
            pattern,
            replacement,
        }) = recipe.steps().last()
        else {
            panic!("last step should be a rewrite");
        };
        assert_eq!(file, &PathBuf::from("/opt/pkg/bin/claude-notify"));
        assert_eq!(pattern, builtin::RELATIVE_LIB_EXPR);
        assert_eq!(replacement, "/opt/pkg/lib/claude-notify");
    }

    #[test]
    fn test_completion_destinations() {
        let recipe = recipe();
        let destinations: Vec<PathBuf> = recipe
            .steps()
            .iter()
            .filter_map(|step| match step {
                InstallStep::OptionalCopy(spec) if spec.source.starts_with("completions") => {
                    Some(spec.destination())
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            destinations,
            [
                PathBuf::from("/opt/pkg/etc/bash_completion.d/claude-notify"),
                PathBuf::from("/opt/pkg/share/zsh/site-functions/_claude-notify"),
                PathBuf::from("/opt/pkg/share/fish/vendor_completions.d/claude-notify.fish"),
            ]
        );
    }

    #[test]
    fn test_lib_and_share_copy_directories() {
        let recipe = recipe();
        let entries: Vec<EntryKind> = recipe
            .steps()
            .iter()
            .filter_map(|step| match step {
                InstallStep::RequiredCopy(spec) | InstallStep::OptionalCopy(spec) => {
                    Some(spec.entry)
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            entries,
            [
                EntryKind::File,
                EntryKind::Directory,
                EntryKind::Directory,
                EntryKind::File,
                EntryKind::File,
                EntryKind::File,
            ]
        );
    }

    #[test]
    fn test_formula_without_optional_parts() {
        let mut formula = builtin::claude_notify();
        formula.install.share = None;
        formula.install.completions.clear();
        formula.install.rewrite = None;
        formula.install.aliases.clear();

        let recipe = Recipe::new(&formula, &Prefix::new("/opt/pkg"));
        assert_eq!(recipe.steps().len(), 2);
        assert!(
            recipe
                .steps()
                .iter()
                .all(|s| matches!(s, InstallStep::RequiredCopy(_)))
        );
    }
}
