//! Recording command runner for testing.
//!
//! Captures every invocation and returns scripted responses, so services can
//! be exercised without the real tool installed.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use stratum_core::{
    application::{ApplicationError, ports::CommandRunner, ports::Filesystem},
    domain::{CommandInvocation, CommandOutput},
    error::StratumResult,
};
use tracing::debug;

use crate::filesystem::MemoryFilesystem;

/// Entry point the simulated tool writes for `new webapi`.
pub const SIMULATED_PROGRAM: &str = "var builder = WebApplication.CreateBuilder(args);

builder.Services.AddControllers();

var app = builder.Build();

app.MapControllers();

app.Run();
";

/// A failure to return instead of success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedFailure {
    /// Fail the Nth invocation (1-based).
    OnCall { call: usize, stderr: String },
    /// Fail every invocation whose argument string contains `needle`.
    WhenContains { needle: String, stderr: String },
}

impl ScriptedFailure {
    fn matches(&self, call: usize, invocation: &CommandInvocation) -> Option<&str> {
        match self {
            Self::OnCall { call: n, stderr } if *n == call => Some(stderr.as_str()),
            Self::WhenContains { needle, stderr }
                if invocation.arguments().contains(needle.as_str()) =>
            {
                Some(stderr.as_str())
            }
            _ => None,
        }
    }
}

type Hook = dyn Fn(&CommandInvocation) -> StratumResult<()> + Send + Sync;

/// Runner that records invocations instead of spawning processes.
///
/// Clones share the recorded calls.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<CommandInvocation>>>,
    failures: Vec<ScriptedFailure>,
    hook: Option<Arc<Hook>>,
}

impl RecordingRunner {
    /// A runner where every invocation succeeds with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// A runner that mimics the tool's side effects on `filesystem`.
    ///
    /// - `new sln -n X` writes `X.sln`
    /// - `new <kind> -n P` creates `P/P.csproj`, failing if `P` already exists
    /// - `new webapi` also writes `P/Program.cs`
    /// - `sln add` and `add .. reference ..` fail unless every project file
    ///   exists relative to the working directory
    pub fn simulating(filesystem: MemoryFilesystem) -> Self {
        Self::new().on_invoke(move |invocation| simulate(&filesystem, invocation))
    }

    /// Fail the Nth invocation (1-based) with the given stderr.
    pub fn fail_on_call(mut self, call: usize, stderr: impl Into<String>) -> Self {
        self.failures.push(ScriptedFailure::OnCall {
            call,
            stderr: stderr.into(),
        });
        self
    }

    /// Fail invocations whose argument string contains `needle`.
    pub fn fail_when_contains(
        mut self,
        needle: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        self.failures.push(ScriptedFailure::WhenContains {
            needle: needle.into(),
            stderr: stderr.into(),
        });
        self
    }

    /// Run `hook` for every invocation that is not scripted to fail.
    ///
    /// An error from the hook is returned as the invocation's result.
    pub fn on_invoke<F>(mut self, hook: F) -> Self
    where
        F: Fn(&CommandInvocation) -> StratumResult<()> + Send + Sync + 'static,
    {
        let hook: Arc<Hook> = Arc::new(hook);
        self.hook = Some(hook);
        self
    }

    /// All invocations so far, in order.
    pub fn calls(&self) -> Vec<CommandInvocation> {
        self.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    /// Rendered command lines, e.g. `dotnet new sln -n Shop`.
    pub fn command_lines(&self) -> Vec<String> {
        self.lock().iter().map(ToString::to_string).collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CommandInvocation>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for RecordingRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingRunner")
            .field("calls", &self.call_count())
            .field("failures", &self.failures)
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &CommandInvocation) -> StratumResult<CommandOutput> {
        let call = {
            let mut calls = self.lock();
            calls.push(invocation.clone());
            calls.len()
        };
        debug!(call, command = %invocation, "Recorded");

        if let Some(stderr) = self
            .failures
            .iter()
            .find_map(|f| f.matches(call, invocation))
        {
            return Err(ApplicationError::CommandFailed {
                executable: invocation.program.clone(),
                arguments: invocation.arguments(),
                stderr: stderr.to_string(),
                exit_code: Some(1),
            }
            .into());
        }

        if let Some(hook) = &self.hook {
            hook(invocation)?;
        }

        Ok(CommandOutput::default())
    }
}

fn simulate(fs: &MemoryFilesystem, invocation: &CommandInvocation) -> StratumResult<()> {
    let root = invocation.working_dir.as_path();
    let args: Vec<&str> = invocation.args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["new", "sln", "-n", name] => fs.write_file(&root.join(format!("{name}.sln")), ""),
        ["new", kind, "-n", name] => {
            let project_dir = root.join(name);
            if fs.exists(&project_dir) {
                return Err(already_exists(invocation, &project_dir));
            }
            fs.create_dir_all(&project_dir)?;
            fs.write_file(&project_dir.join(format!("{name}.csproj")), "<Project />")?;
            if *kind == "webapi" {
                fs.write_file(&project_dir.join("Program.cs"), SIMULATED_PROGRAM)?;
            }
            Ok(())
        }
        ["sln", "add", project] => require_project(fs, invocation, project),
        ["add", from, "reference", to] => {
            require_project(fs, invocation, from)?;
            require_project(fs, invocation, to)
        }
        _ => Ok(()),
    }
}

fn require_project(
    fs: &MemoryFilesystem,
    invocation: &CommandInvocation,
    project: &str,
) -> StratumResult<()> {
    let resolved = invocation.working_dir.join(project);
    if fs.is_file(&resolved) {
        return Ok(());
    }
    Err(ApplicationError::CommandFailed {
        executable: invocation.program.clone(),
        arguments: invocation.arguments(),
        stderr: format!(
            "Project file '{project}' not found (cwd {})",
            invocation.working_dir.display()
        ),
        exit_code: Some(1),
    }
    .into())
}

fn already_exists(invocation: &CommandInvocation, path: &Path) -> stratum_core::error::StratumError {
    ApplicationError::CommandFailed {
        executable: invocation.program.clone(),
        arguments: invocation.arguments(),
        stderr: format!(
            "Creating this template will make changes to existing files: {}",
            path.display()
        ),
        exit_code: Some(73),
    }
    .into()
}
