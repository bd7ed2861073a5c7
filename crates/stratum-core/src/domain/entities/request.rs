use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::SolutionName};

/// Caller input for one "create solution" invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionRequest {
    pub solution_name: String,
    pub directory_path: PathBuf,
}

impl SolutionRequest {
    pub fn new(solution_name: impl Into<String>, directory_path: impl Into<PathBuf>) -> Self {
        Self {
            solution_name: solution_name.into(),
            directory_path: directory_path.into(),
        }
    }

    /// Validate the request once, before any side effect.
    pub fn validate(&self) -> Result<SolutionName, DomainError> {
        SolutionName::new(&self.solution_name)
    }

    /// `{directory_path}/{solution_name}`
    pub fn workspace_root(&self, name: &SolutionName) -> PathBuf {
        workspace_root(&self.directory_path, name)
    }
}

pub fn workspace_root(directory: &Path, name: &SolutionName) -> PathBuf {
    directory.join(name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_root_nests_solution_under_directory() {
        let request = SolutionRequest::new("Shop", "/tmp/x");
        let name = request.validate().unwrap();
        assert_eq!(request.workspace_root(&name), PathBuf::from("/tmp/x/Shop"));
    }

    #[test]
    fn blank_name_fails_validation() {
        let request = SolutionRequest::new("  ", "/tmp/x");
        assert!(matches!(
            request.validate(),
            Err(DomainError::InvalidSolutionName { .. })
        ));
    }

    #[test]
    fn request_uses_camel_case_on_the_wire() {
        let request: SolutionRequest =
            serde_json::from_str(r#"{"solutionName":"Shop","directoryPath":"out"}"#).unwrap();
        assert_eq!(request, SolutionRequest::new("Shop", "out"));
    }
}
