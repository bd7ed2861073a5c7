// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stratum.
//!
//! This module contains pure logic with no I/O. Process execution and
//! filesystem access are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Tool invocations are data; the patch decision is a pure function
//! - **Immutable entities**: The project graph is validated once and never mutated
//!
// Public API - what the world sees
pub mod blueprint;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    command::{CommandInvocation, CommandOutput, DEFAULT_TOOL, ToolCommands},
    common::RelativePath,
    entry_point::{EntryPointPatch, PatchOutcome, PatchState},
    graph::{DependencyEdge, ProjectGraph},
    project::{FileTemplate, ProjectSpec},
    request::SolutionRequest,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{ProjectName, ProjectRole, SolutionName, TemplateKind};

pub use validation::DomainValidator;
