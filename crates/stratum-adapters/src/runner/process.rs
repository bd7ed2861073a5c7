//! Process runner adapter using std::process.

use std::process::{Command, Stdio};
use std::time::Instant;

use stratum_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::{CommandInvocation, CommandOutput},
    error::StratumResult,
};
use tracing::{debug, instrument, warn};

/// Production runner: one child process per invocation, blocking.
///
/// `Command::output` reads stdout and stderr concurrently until both close,
/// so a chatty tool cannot fill a pipe and stall before it exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    #[instrument(skip_all, fields(command = %invocation))]
    fn run(&self, invocation: &CommandInvocation) -> StratumResult<CommandOutput> {
        let started = Instant::now();

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                warn!(error = %e, "Failed to start tool");
                ApplicationError::CommandSpawn {
                    executable: invocation.program.clone(),
                    reason: e.to_string(),
                }
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            warn!(
                exit_code = ?output.status.code(),
                stderr = %stderr.trim(),
                "Tool command failed"
            );
            return Err(ApplicationError::CommandFailed {
                executable: invocation.program.clone(),
                arguments: invocation.arguments(),
                stderr: stderr.trim().to_string(),
                exit_code: output.status.code(),
            }
            .into());
        }

        debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            stdout_bytes = stdout.len(),
            "Tool command finished"
        );

        Ok(CommandOutput::new(stdout, stderr))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use stratum_core::error::StratumError;
    use tempfile::TempDir;

    fn sh(dir: &TempDir, script: &str) -> CommandInvocation {
        CommandInvocation::new("sh", vec!["-c".to_string(), script.to_string()], dir.path())
    }

    #[test]
    fn captures_stdout_on_success() {
        let dir = TempDir::new().unwrap();
        let out = ProcessRunner::new().run(&sh(&dir, "echo hello")).unwrap();
        assert_eq!(out.stdout.trim(), "hello");
    }

    #[test]
    fn runs_in_working_directory() {
        let dir = TempDir::new().unwrap();
        ProcessRunner::new()
            .run(&sh(&dir, "mkdir Domain"))
            .unwrap();
        assert!(dir.path().join("Domain").is_dir());
    }

    #[test]
    fn nonzero_exit_carries_stderr() {
        let dir = TempDir::new().unwrap();
        let err = ProcessRunner::new()
            .run(&sh(&dir, "echo 'disk full' >&2; exit 3"))
            .unwrap_err();
        match err {
            StratumError::Application(ApplicationError::CommandFailed {
                executable,
                stderr,
                exit_code,
                ..
            }) => {
                assert_eq!(executable, "sh");
                assert_eq!(stderr, "disk full");
                assert_eq!(exit_code, Some(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn large_output_does_not_deadlock() {
        let dir = TempDir::new().unwrap();
        // Well past a typical 64 KiB pipe buffer, on both streams.
        let script = "i=0; while [ $i -lt 4000 ]; do \
                      echo 'xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx'; \
                      echo 'yyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyy' >&2; \
                      i=$((i+1)); done";
        let out = ProcessRunner::new().run(&sh(&dir, script)).unwrap();
        assert!(out.stdout.len() > 150_000);
        assert!(out.stderr.len() > 150_000);
    }

    #[test]
    fn missing_binary_is_spawn_error() {
        let dir = TempDir::new().unwrap();
        let inv = CommandInvocation::new(
            "/nonexistent/stratum-test-tool",
            vec!["new".to_string()],
            dir.path(),
        );
        let err = ProcessRunner::new().run(&inv).unwrap_err();
        assert!(matches!(
            err,
            StratumError::Application(ApplicationError::CommandSpawn { .. })
        ));
    }
}
