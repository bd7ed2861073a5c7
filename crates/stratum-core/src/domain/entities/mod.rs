pub mod command;
pub mod common;
pub mod entry_point;
pub mod graph;
pub mod project;
pub mod request;

pub use crate::domain::DomainError;
pub use command::{CommandInvocation, CommandOutput, ToolCommands};
pub use entry_point::{EntryPointPatch, PatchOutcome, PatchState};
pub use graph::{DependencyEdge, ProjectGraph};
pub use project::{FileTemplate, ProjectSpec};
pub use request::SolutionRequest;
