//! Application layer for Stratum.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (SolutionService and its steps)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Graph rules, naming
//! rules and the patch decision live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    EntryPointPatcher, ScaffoldReport, ScaffoldSequencer, SolutionService, TemplateGenerator,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, Filesystem};

pub use error::ApplicationError;
