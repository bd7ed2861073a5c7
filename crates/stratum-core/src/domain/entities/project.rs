use std::path::{Path, PathBuf};

use crate::domain::{
    entities::common::RelativePath,
    error::DomainError,
    value_objects::{ProjectName, ProjectRole, TemplateKind},
};

/// One fixed-content file written into a project after the tool created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTemplate {
    pub path: RelativePath,
    pub content: &'static str,
}

impl FileTemplate {
    pub fn new(path: &str, content: &'static str) -> Result<Self, DomainError> {
        Ok(Self {
            path: RelativePath::try_new(path)?,
            content,
        })
    }
}

/// Fixed description of one generated project.
///
/// Immutable once built; the graph owns every spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: ProjectName,
    kind: TemplateKind,
    role: ProjectRole,
    files: Vec<FileTemplate>,
}

impl ProjectSpec {
    pub fn new(name: ProjectName, kind: TemplateKind, role: ProjectRole) -> Self {
        Self {
            name,
            kind,
            role,
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, file: FileTemplate) -> Self {
        self.files.push(file);
        self
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn role(&self) -> ProjectRole {
        self.role
    }

    pub fn files(&self) -> &[FileTemplate] {
        &self.files
    }

    /// `root/<name>`
    pub fn directory(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(self.name.as_str())
    }

    /// `<name>/<name>.csproj`, relative to the workspace root.
    pub fn project_file(&self) -> PathBuf {
        self.name.project_file()
    }
}
