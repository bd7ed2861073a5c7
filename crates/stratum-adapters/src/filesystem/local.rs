//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use stratum_core::{
    application::{ApplicationError, ports::Filesystem},
    error::StratumResult,
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StratumResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| write_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StratumResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| write_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> StratumResult<String> {
        std::fs::read_to_string(path).map_err(|e| {
            ApplicationError::FileRead {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn write_error(path: &Path, e: io::Error, operation: &str) -> stratum_core::error::StratumError {
    ApplicationError::FileWrite {
        path: PathBuf::from(path),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratum_core::error::StratumError;
    use tempfile::TempDir;

    #[test]
    fn write_then_read() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("a.cs");

        fs.write_file(&path, "class A {}").unwrap();

        assert!(fs.is_file(&path));
        assert_eq!(fs.read_file(&path).unwrap(), "class A {}");
    }

    #[test]
    fn write_overwrites() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("a.cs");

        fs.write_file(&path, "old old old").unwrap();
        fs.write_file(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn write_without_parent_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("a.cs");

        let err = LocalFilesystem::new().write_file(&path, "x").unwrap_err();
        assert!(matches!(
            err,
            StratumError::Application(ApplicationError::FileWrite { .. })
        ));
    }

    #[test]
    fn create_dir_over_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Shop");
        std::fs::write(&path, "not a directory").unwrap();

        let err = LocalFilesystem::new().create_dir_all(&path).unwrap_err();
        assert!(err.to_string().contains("create directory"));
    }

    #[test]
    fn create_dir_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("a").join("b");

        fs.create_dir_all(&path).unwrap();
        fs.create_dir_all(&path).unwrap();
        assert!(fs.exists(&path));
        assert!(!fs.is_file(&path));
    }

    #[test]
    fn read_missing_is_file_read_error() {
        let dir = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .read_file(&dir.path().join("nope"))
            .unwrap_err();
        assert!(matches!(
            err,
            StratumError::Application(ApplicationError::FileRead { .. })
        ));
    }
}
