//! Template File Generator - writes the fixed source files of a project.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{application::ports::Filesystem, domain::ProjectSpec, error::StratumResult};

/// Writes each template of a project under `root/<project>/`.
///
/// Files are fully overwritten, so running it twice yields identical bytes.
/// The project directory is expected to exist already (the tool creates it).
pub struct TemplateGenerator<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> TemplateGenerator<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Write all templates of `spec`; returns the written paths in order.
    #[instrument(skip_all, fields(project = %spec.name()))]
    pub fn generate(&self, workspace_root: &Path, spec: &ProjectSpec) -> StratumResult<Vec<PathBuf>> {
        let directory = spec.directory(workspace_root);
        let mut written = Vec::with_capacity(spec.files().len());

        for template in spec.files() {
            let path = directory.join(template.path.as_path());
            self.filesystem.write_file(&path, template.content)?;
            debug!(path = %path.display(), bytes = template.content.len(), "Wrote template");
            written.push(path);
        }

        Ok(written)
    }
}
