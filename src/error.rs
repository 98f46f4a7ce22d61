//! Error types for the install recipe
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! A missing optional source is not an error; it surfaces as a skipped step
//! in [`crate::installer::StepOutcome`].

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for formula operations
#[derive(Error, Diagnostic, Debug)]
pub enum FormulaError {
    // Recipe errors
    #[error("Required source is missing: {path}")]
    #[diagnostic(
        code(formula::recipe::missing_required),
        help("The source tree must contain bin/claude-notify and lib/claude-notify/")
    )]
    MissingRequired { path: String },

    #[error("Source directory not found: {path}")]
    #[diagnostic(
        code(formula::recipe::source_not_found),
        help("Pass the root of an unpacked release archive with --source")
    )]
    SourceNotFound { path: String },

    #[error("Pattern '{pattern}' not found in {path}")]
    #[diagnostic(
        code(formula::recipe::rewrite_no_match),
        help("The script no longer contains the expected relative library path")
    )]
    RewriteNoMatch { path: String, pattern: String },

    // Formula definition errors
    #[error("Failed to parse formula file: {path}: {reason}")]
    #[diagnostic(code(formula::config::parse_failed))]
    FormulaParseFailed { path: String, reason: String },

    #[error("Invalid formula: {message}")]
    #[diagnostic(code(formula::config::invalid))]
    FormulaInvalid { message: String },

    // Receipt errors
    #[error("No install receipt found at {path}")]
    #[diagnostic(
        code(formula::receipt::not_found),
        help("Nothing is installed under this prefix, or it was installed by another tool")
    )]
    ReceiptNotFound { path: String },

    #[error("Failed to parse install receipt {path}: {reason}")]
    #[diagnostic(code(formula::receipt::parse_failed))]
    ReceiptParseFailed { path: String, reason: String },

    // Verification errors
    #[error("{failed} of {total} smoke checks failed")]
    #[diagnostic(
        code(formula::test::failed),
        help("Run the failing command by hand to see its output")
    )]
    SmokeTestFailed { failed: usize, total: usize },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(formula::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("Uninstall cancelled")]
    #[diagnostic(code(formula::uninstall::cancelled))]
    Cancelled,

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(formula::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(formula::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create symlink {link} -> {target}: {reason}")]
    #[diagnostic(code(formula::fs::symlink_failed))]
    SymlinkFailed {
        link: String,
        target: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(formula::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for FormulaError {
    fn from(err: std::io::Error) -> Self {
        FormulaError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FormulaError {
    fn from(err: serde_json::Error) -> Self {
        FormulaError::ReceiptParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for FormulaError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => FormulaError::Cancelled,
            other => FormulaError::IoError {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FormulaError>;
