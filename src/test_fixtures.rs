//! Test fixtures for building fake `claude-notify` source trees.
//!
//! ```ignore
//! let tree = SourceTree::complete();
//! let prefix = tempfile::TempDir::new().unwrap();
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::formula::builtin::RELATIVE_LIB_EXPR;
use crate::layout::Shell;

/// Shell script standing in for the real tool: answers `version` and
/// `status`, and carries the relative lib expression the recipe rewrites.
pub fn stub_script() -> String {
    format!(
        "#!/bin/sh\n\
         SCRIPT_DIR=\"$(cd \"$(dirname \"$0\")\" && pwd)\"\n\
         LIB_DIR=\"{RELATIVE_LIB_EXPR}\"\n\
         case \"$1\" in\n  \
           version) echo \"claude-notify 1.0.0\" ;;\n  \
           status) echo \"enabled\" ;;\n  \
           *) exit 2 ;;\n\
         esac\n"
    )
}

/// A source tree in a temp directory
pub struct SourceTree {
    pub temp: TempDir,
}

impl SourceTree {
    pub fn empty() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Executable and lib directory only
    pub fn minimal() -> Self {
        let tree = Self::empty();
        tree.write_executable("bin/claude-notify", &stub_script());
        tree.write("lib/claude-notify/common.sh", "notify() { :; }\n");
        tree
    }

    /// Every optional part present
    pub fn complete() -> Self {
        let tree = Self::minimal();
        tree.write("share/claude-notify/sounds/done.aiff", "snd");
        for shell in Shell::ALL {
            tree.add_completion(shell);
        }
        tree
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn add_completion(&self, shell: Shell) {
        let relative = match shell {
            Shell::Bash => "completions/bash/claude-notify",
            Shell::Zsh => "completions/zsh/_claude-notify",
            Shell::Fish => "completions/fish/claude-notify.fish",
        };
        self.write(relative, &format!("# {shell} completion\n"));
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn write_executable(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.write(relative, content);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to set permissions");
        }
        path
    }
}
