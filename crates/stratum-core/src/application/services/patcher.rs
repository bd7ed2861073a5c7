//! Entry-Point Patcher - registers the generated IoC module in the
//! tool-generated entry point, at most once.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainError, EntryPointPatch, PatchOutcome, PatchState},
    error::StratumResult,
};

/// Applies an [`EntryPointPatch`] to a file on disk.
pub struct EntryPointPatcher<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> EntryPointPatcher<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Patch the file at `path`.
    ///
    /// - missing file: no-op
    /// - marker present: no-op, file untouched
    /// - anchor present: snippet inserted before the first anchor
    /// - neither: `PatchAnchorNotFound`, file untouched
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn patch(&self, path: &Path, patch: &EntryPointPatch) -> StratumResult<PatchOutcome> {
        if !self.filesystem.is_file(path) {
            info!("No entry point to patch");
            return Ok(PatchOutcome::MissingFile);
        }

        let content = self.filesystem.read_file(path)?;

        match patch.apply(&content) {
            Ok(PatchState::Patched) => {
                info!(marker = patch.marker, "Entry point already patched");
                Ok(PatchOutcome::AlreadyPatched)
            }
            Ok(PatchState::Unpatched { patched }) => {
                self.filesystem.write_file(path, &patched)?;
                info!("Entry point patched");
                Ok(PatchOutcome::Patched)
            }
            Err(DomainError::PatchAnchorMissing { anchor, .. }) => {
                Err(ApplicationError::PatchAnchorNotFound {
                    path: path.to_path_buf(),
                    anchor,
                }
                .into())
            }
            Err(other) => Err(other.into()),
        }
    }
}
