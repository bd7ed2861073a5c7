//! Command runner adapters.

mod process;
mod recording;

pub use process::ProcessRunner;
pub use recording::{RecordingRunner, SIMULATED_PROGRAM, ScriptedFailure};
