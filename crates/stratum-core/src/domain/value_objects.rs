//! Value objects: small, validated, immutable types.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::DomainError;

// ============================================================================
// TemplateKind
// ============================================================================

/// The tool template a project is created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// An HTTP API host with a generated entry point.
    WebApi,
    /// A plain class library.
    ClassLib,
}

impl TemplateKind {
    /// The template short name understood by the tool (`new <short-name>`).
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::WebApi => "webapi",
            Self::ClassLib => "classlib",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

// ============================================================================
// ProjectRole
// ============================================================================

/// The architectural layer a project plays in the layered solution.
///
/// Template bodies are keyed by role, see [`crate::domain::blueprint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectRole {
    Presentation,
    Domain,
    Application,
    InfraData,
    InfraIoc,
}

impl ProjectRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Presentation => "presentation",
            Self::Domain => "domain",
            Self::Application => "application",
            Self::InfraData => "infra-data",
            Self::InfraIoc => "infra-ioc",
        }
    }
}

impl fmt::Display for ProjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Names
// ============================================================================

/// Name of a project inside the solution; doubles as its directory name.
///
/// Invariant: non-empty, no whitespace, no path separators, no leading `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if let Some(reason) = path_component_problem(&name) {
            return Err(DomainError::InvalidProjectName { name, reason });
        }
        if name.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidProjectName {
                name,
                reason: "name cannot contain whitespace".into(),
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the project file the tool creates, e.g. `Domain.csproj`.
    pub fn project_file_name(&self) -> String {
        format!("{}.csproj", self.0)
    }

    /// `<name>/<name>.csproj`, relative to the workspace root the tool runs in.
    pub fn project_file(&self) -> PathBuf {
        Path::new(&self.0).join(self.project_file_name())
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectName> for String {
    fn from(value: ProjectName) -> Self {
        value.0
    }
}

/// Validated solution name.
///
/// Only produced by [`crate::domain::SolutionRequest::validate`] or
/// [`SolutionName::new`]; surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SolutionName(String);

impl SolutionName {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidSolutionName {
                name: raw.to_string(),
                reason: "the solution name is required".into(),
            });
        }
        if let Some(reason) = path_component_problem(name) {
            return Err(DomainError::InvalidSolutionName {
                name: raw.to_string(),
                reason,
            });
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SolutionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SolutionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Reasons a string cannot be used as a single directory name.
fn path_component_problem(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("name cannot be empty".into());
    }
    if name == "." || name == ".." {
        return Some("name cannot be a relative directory reference".into());
    }
    if name.starts_with('.') {
        return Some("name cannot start with '.'".into());
    }
    if name.contains('/') || name.contains('\\') {
        return Some("name cannot contain path separators".into());
    }
    None
}
