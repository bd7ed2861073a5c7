//! Application services - orchestrate use cases.
//!
//! `SolutionService` is the facade; the sequencer, generator and patcher are
//! the individual steps it runs in order.

pub mod generator;
pub mod patcher;
pub mod sequencer;
pub mod solution_service;

pub use generator::TemplateGenerator;
pub use patcher::EntryPointPatcher;
pub use sequencer::ScaffoldSequencer;
pub use solution_service::{ScaffoldReport, SolutionService};
