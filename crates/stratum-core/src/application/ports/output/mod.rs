//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stratum-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{CommandInvocation, CommandOutput};
use crate::error::StratumResult;

/// Port for running the external project-management tool.
///
/// Implemented by:
/// - `stratum_adapters::runner::ProcessRunner` (production)
/// - `stratum_adapters::runner::RecordingRunner` (testing)
///
/// ## Contract
///
/// - Spawns exactly one process and blocks until it exits
/// - Both output streams are drained before the exit status is inspected
/// - Non-zero exit is an `ApplicationError::CommandFailed` carrying stderr
/// - No retries, no timeout
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run one invocation to completion.
    fn run(&self, invocation: &CommandInvocation) -> StratumResult<CommandOutput>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stratum_adapters::filesystem::LocalFilesystem` (production)
/// - `stratum_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// Succeeds if the directory already exists; fails if the path exists
    /// as something other than a directory.
    fn create_dir_all(&self, path: &Path) -> StratumResult<()>;

    /// Write content to a file, replacing any previous content.
    ///
    /// The parent directory must already exist.
    fn write_file(&self, path: &Path, content: &str) -> StratumResult<()>;

    /// Read a whole file as UTF-8.
    fn read_file(&self, path: &Path) -> StratumResult<String>;

    /// Check if a regular file exists at path.
    fn is_file(&self, path: &Path) -> bool;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
