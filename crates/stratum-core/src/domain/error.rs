// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside wrapped scaffold errors)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid solution name '{name}': {reason}")]
    InvalidSolutionName { name: String, reason: String },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Path must be relative and must not contain '..': {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Graph Errors
    // ========================================================================
    #[error("Project graph declares no projects")]
    EmptyGraph,

    #[error("Project '{name}' is declared more than once")]
    DuplicateProject { name: String },

    #[error("Dependency {from} -> {to} is declared more than once")]
    DuplicateEdge { from: String, to: String },

    #[error("Dependency {from} -> {to} names undeclared project '{missing}'")]
    UnknownProject {
        from: String,
        to: String,
        missing: String,
    },

    #[error("Project '{name}' cannot reference itself")]
    SelfReference { name: String },

    #[error("Dependency cycle between projects: {}", projects.join(", "))]
    DependencyCycle { projects: Vec<String> },

    // ========================================================================
    // Compatibility Errors (409-level equivalent)
    // ========================================================================
    #[error("Entry point has neither marker '{marker}' nor anchor '{anchor}'")]
    PatchAnchorMissing { anchor: String, marker: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidSolutionName { reason, .. } => vec![
                format!("Solution name rejected: {}", reason),
                "Use a plain name such as Shop or Billing.Api".into(),
            ],
            Self::InvalidProjectName { name, .. } => vec![
                format!("Project name '{}' cannot be used as a directory", name),
                "Project names must be non-empty and contain no path separators".into(),
            ],
            Self::DependencyCycle { projects } => vec![
                format!("These projects reference each other: {}", projects.join(", ")),
                "Remove one of the references to break the cycle".into(),
            ],
            Self::PatchAnchorMissing { anchor, .. } => vec![
                format!("The entry point no longer contains '{}'", anchor),
                "The tool's webapi template may have changed; check your tool version".into(),
            ],
            _ => vec!["The built-in project graph is inconsistent; please report this".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSolutionName { .. }
            | Self::InvalidProjectName { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::PatchAnchorMissing { .. } => ErrorCategory::Compatibility,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    Internal,
}
