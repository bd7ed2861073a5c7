//! Marker-guarded entry-point patch.
//!
//! The entry-point file belongs to the external tool, so it is treated as
//! opaque text: a marker substring means the patch is already applied, an
//! anchor substring says where to insert. Nothing else is interpreted.

use serde::Serialize;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Describes one insertion into a tool-generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPointPatch {
    /// Path relative to the owning project's directory.
    pub relative_path: RelativePath,
    pub snippet: &'static str,
    pub anchor: &'static str,
    pub marker: &'static str,
}

/// State of the file contents with respect to a patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchState {
    /// Marker present; contents must be left untouched.
    Patched,
    /// Marker absent; carries the contents with the snippet inserted.
    Unpatched { patched: String },
}

/// What the patcher did to the file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatchOutcome {
    /// No entry point exists; nothing to patch.
    MissingFile,
    /// Marker already present; file untouched.
    AlreadyPatched,
    /// Snippet inserted before the anchor.
    Patched,
}

impl EntryPointPatch {
    /// Decide what to do with `content`.
    ///
    /// The snippet is inserted immediately before the first occurrence of
    /// the anchor. Fails when neither marker nor anchor is present.
    pub fn apply(&self, content: &str) -> Result<PatchState, DomainError> {
        if content.contains(self.marker) {
            return Ok(PatchState::Patched);
        }

        let Some(at) = content.find(self.anchor) else {
            return Err(DomainError::PatchAnchorMissing {
                anchor: self.anchor.to_string(),
                marker: self.marker.to_string(),
            });
        };

        let mut patched = String::with_capacity(content.len() + self.snippet.len());
        patched.push_str(&content[..at]);
        patched.push_str(self.snippet);
        patched.push_str(&content[at..]);

        Ok(PatchState::Unpatched { patched })
    }
}
