//! Application layer errors.
//!
//! These errors represent failures talking to the outside world (the tool,
//! the filesystem), not graph or naming rules. Those are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while executing a scaffold.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The external tool exited with a non-zero status.
    #[error("Command '{executable} {arguments}' failed: {stderr}")]
    CommandFailed {
        executable: String,
        arguments: String,
        stderr: String,
        exit_code: Option<i32>,
    },

    /// The external tool could not be started at all.
    #[error("Could not start '{executable}': {reason}")]
    CommandSpawn { executable: String, reason: String },

    /// Writing a file or creating a directory failed.
    #[error("Failed to write {path}: {reason}")]
    FileWrite { path: PathBuf, reason: String },

    /// Reading an existing file failed.
    #[error("Failed to read {path}: {reason}")]
    FileRead { path: PathBuf, reason: String },

    /// The entry point exists, lacks the marker, and lacks the anchor.
    #[error("Entry point {path} does not contain '{anchor}'")]
    PatchAnchorNotFound { path: PathBuf, anchor: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CommandFailed { executable, .. } => vec![
                format!("'{}' reported an error; see its output above", executable),
                "Partially created projects are left on disk; remove the solution directory before retrying".into(),
            ],
            Self::CommandSpawn { executable, .. } => vec![
                format!("Ensure '{}' is installed and on your PATH", executable),
                "Or point tool.executable in the config at the right binary".into(),
            ],
            Self::FileWrite { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::FileRead { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check file permissions".into(),
            ],
            Self::PatchAnchorNotFound { anchor, .. } => vec![
                format!("Expected the entry point to contain '{}'", anchor),
                "Your tool version may generate a different Program.cs".into(),
                "Add the registration call to Program.cs by hand".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CommandFailed { .. } | Self::CommandSpawn { .. } => ErrorCategory::ExternalTool,
            Self::FileWrite { .. } | Self::FileRead { .. } => ErrorCategory::Filesystem,
            Self::PatchAnchorNotFound { .. } => ErrorCategory::Compatibility,
        }
    }
}
