//! Unified error handling for Stratum Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stratum Core operations.
///
/// This enum wraps all possible errors that can occur when using stratum-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum StratumError {
    /// Errors from the domain layer (naming and graph rules).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (tool and filesystem failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// A step of `create_solution` failed after side effects began.
    ///
    /// The workspace may be partially constructed on disk. The cause is part
    /// of the message and is not repeated as an error source.
    #[error("Failed to create solution '{solution}': {cause}")]
    Scaffold {
        solution: String,
        cause: Box<StratumError>,
    },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StratumError {
    /// Wrap a step failure of `create_solution`.
    pub fn scaffold(solution: impl Into<String>, cause: StratumError) -> Self {
        Self::Scaffold {
            solution: solution.into(),
            cause: Box::new(cause),
        }
    }

    /// The innermost non-wrapper error.
    pub fn root_cause(&self) -> &StratumError {
        match self {
            Self::Scaffold { cause, .. } => cause.root_cause(),
            other => other,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Scaffold { cause, .. } => {
                let mut suggestions = cause.suggestions();
                suggestions.push(
                    "The solution directory may be partially created; inspect or remove it".into(),
                );
                suggestions
            }
            Self::Internal { .. } => vec![
                "This appears to be a bug in Stratum".into(),
                "Please report this issue at: https://github.com/stratum-dev/stratum/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Compatibility => ErrorCategory::Compatibility,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Scaffold { cause, .. } => cause.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    ExternalTool,
    Filesystem,
    Compatibility,
    Internal,
}

/// Convenient result type alias.
pub type StratumResult<T> = Result<T, StratumError>;
