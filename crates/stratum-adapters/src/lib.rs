//! Infrastructure adapters for Stratum.
//!
//! This crate implements the ports defined in `stratum-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod runner;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use runner::{ProcessRunner, RecordingRunner, SIMULATED_PROGRAM, ScriptedFailure};
