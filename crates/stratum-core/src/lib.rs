//! Stratum Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stratum
//! solution scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stratum-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (SolutionService, ScaffoldSequencer,   │
//! │   TemplateGenerator, EntryPointPatcher) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: CommandRunner, Filesystem)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stratum-adapters (Infrastructure)    │
//! │ (ProcessRunner, LocalFilesystem, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectGraph, ToolCommands, Blueprint) │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stratum_core::{
//!     application::SolutionService,
//!     domain::{SolutionRequest, ToolCommands},
//! };
//!
//! // Adapters come from stratum-adapters
//! let service = SolutionService::layered(runner, filesystem, ToolCommands::default())?;
//! let report = service.create_solution(&SolutionRequest::new("Shop", "/tmp/x"))?;
//! println!("{}", report.message());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EntryPointPatcher, ScaffoldReport, ScaffoldSequencer, SolutionService, TemplateGenerator,
        ports::{CommandRunner, Filesystem},
    };
    pub use crate::domain::{
        CommandInvocation, CommandOutput, DependencyEdge, EntryPointPatch, PatchOutcome,
        ProjectGraph, ProjectName, ProjectRole, ProjectSpec, SolutionName, SolutionRequest,
        TemplateKind, ToolCommands, blueprint,
    };
    pub use crate::error::{ErrorCategory, StratumError, StratumResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
