//! Common test utilities for integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Relative lib lookup the release script carries before install
pub const RELATIVE_LIB_EXPR: &str = r#"$(dirname "$SCRIPT_DIR")/lib/claude-notify"#;

/// A fake release tree next to an empty install prefix
#[allow(dead_code)]
pub struct TestEnv {
    /// Temporary directory holding both trees
    pub temp: TempDir,
    /// Unpacked source tree
    pub source: PathBuf,
    /// Install prefix
    pub prefix: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Empty source tree
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("claude-notify-1.0.0");
        let prefix = temp.path().join("prefix");
        std::fs::create_dir_all(&source).expect("Failed to create source directory");
        Self {
            temp,
            source,
            prefix,
        }
    }

    /// Source tree with the executable and lib directory only
    pub fn minimal() -> Self {
        let env = Self::new();
        env.write_executable("bin/claude-notify", &stub_script());
        env.write_source("lib/claude-notify/common.sh", "notify() { :; }\n");
        env
    }

    /// Source tree with every optional part
    pub fn complete() -> Self {
        let env = Self::minimal();
        env.write_source("share/claude-notify/icon.png", "png");
        env.write_source("completions/bash/claude-notify", "# bash\n");
        env.write_source("completions/zsh/_claude-notify", "# zsh\n");
        env.write_source("completions/fish/claude-notify.fish", "# fish\n");
        env
    }

    /// Write a file in the source tree
    pub fn write_source(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.source.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write an executable file in the source tree
    pub fn write_executable(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.write_source(path, content);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&file_path, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to set permissions");
        }
        file_path
    }

    /// Path under the prefix
    pub fn installed(&self, path: &str) -> PathBuf {
        self.prefix.join(path)
    }

    /// Read a file under the prefix
    pub fn read_installed(&self, path: &str) -> String {
        std::fs::read_to_string(self.installed(path)).expect("Failed to read file")
    }

    /// Command preconfigured with this prefix
    pub fn cmd(&self) -> Command {
        let mut cmd = formula_cmd();
        cmd.env_remove("CLAUDE_NOTIFY_PREFIX")
            .arg("--prefix")
            .arg(&self.prefix);
        cmd
    }

    /// `install --source <tree> --no-caveats`
    pub fn install(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("install")
            .arg("--source")
            .arg(&self.source)
            .arg("--no-caveats");
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn formula_cmd() -> Command {
    Command::cargo_bin("claude-notify-formula").expect("binary is built")
}

/// Stand-in for the real tool: answers `version` and `status`
pub fn stub_script() -> String {
    format!(
        "#!/bin/sh\n\
         SCRIPT_DIR=\"$(cd \"$(dirname \"$0\")\" && pwd)\"\n\
         LIB_DIR=\"{RELATIVE_LIB_EXPR}\"\n\
         [ -d \"$LIB_DIR\" ] || exit 3\n\
         case \"$1\" in\n  \
           version) echo \"claude-notify 1.0.0\" ;;\n  \
           status) echo \"enabled\" ;;\n  \
           *) exit 2 ;;\n\
         esac\n"
    )
}

/// Whether `path` is a symlink, without following it
#[allow(dead_code)]
pub fn is_symlink(path: &Path) -> bool {
    path.symlink_metadata()
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}
