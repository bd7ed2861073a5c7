//! External tool invocations as plain data.
//!
//! Building an invocation performs no I/O; the `CommandRunner` port executes
//! it. Keeping the mapping here lets the sequencer produce a dry-run plan
//! from the same code path that drives the real run.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::{SolutionName, TemplateKind};

/// Default project-management tool.
pub const DEFAULT_TOOL: &str = "dotnet";

/// A single external command: program, arguments, working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl CommandInvocation {
    pub fn new<I, S>(program: impl Into<String>, args: I, working_dir: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: working_dir.into(),
        }
    }

    /// Arguments rendered as one string, quoting those containing spaces.
    pub fn arguments(&self) -> String {
        self.args
            .iter()
            .map(|a| {
                if a.contains(char::is_whitespace) {
                    format!("\"{a}\"")
                } else {
                    a.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            f.write_str(&self.program)
        } else {
            write!(f, "{} {}", self.program, self.arguments())
        }
    }
}

/// Captured output of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

/// Maps the four logical tool operations onto concrete invocations.
///
/// Every invocation runs with the workspace root as working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommands {
    executable: String,
}

impl ToolCommands {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// `new sln -n <solution>`
    pub fn init_solution(&self, root: &Path, solution: &SolutionName) -> CommandInvocation {
        self.invocation(root, ["new", "sln", "-n", solution.as_str()])
    }

    /// `new <kind> -n <project>`
    pub fn new_project(&self, root: &Path, kind: TemplateKind, project: &str) -> CommandInvocation {
        self.invocation(root, ["new", kind.short_name(), "-n", project])
    }

    /// `sln add <project-file>`
    pub fn add_to_solution(&self, root: &Path, project_file: &Path) -> CommandInvocation {
        let project_file = project_file.display().to_string();
        self.invocation(root, ["sln", "add", project_file.as_str()])
    }

    /// `add <from-project-file> reference <to-project-file>`
    pub fn add_reference(&self, root: &Path, from: &Path, to: &Path) -> CommandInvocation {
        let from = from.display().to_string();
        let to = to.display().to_string();
        self.invocation(root, ["add", from.as_str(), "reference", to.as_str()])
    }

    fn invocation<'a>(
        &self,
        root: &Path,
        args: impl IntoIterator<Item = &'a str>,
    ) -> CommandInvocation {
        CommandInvocation::new(self.executable.as_str(), args, root)
    }
}

impl Default for ToolCommands {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL)
    }
}
