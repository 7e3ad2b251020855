//! Spawning external processes and classifying their exit.

use crate::bundler::{
    arguments::CommandLine,
    error::{Error, Result},
};
use std::{future::Future, path::Path, process::Stdio};

/// Captured outcome of a finished process.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExecutionResult {
    /// Exit code; `-1` when the process was terminated by a signal.
    pub exit_code: i32,
    /// Complete standard output.
    pub stdout: String,
    /// Complete standard error.
    pub stderr: String,
}

impl ExecutionResult {
    /// Whether the process exited with code zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Non-blank stdout lines, trimmed of surrounding whitespace.
    pub fn stdout_lines(&self) -> impl Iterator<Item = &str> {
        self.stdout
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
    }
}

/// Runs a program to completion with fully captured output.
///
/// The seam lets tests substitute a recorded fake for the real jpackage.
pub trait ProcessRunner {
    /// Runs `program` with `args` as its argv.
    ///
    /// A process that could not be started is reported as
    /// [`Error::ProcessStartFailure`]; a non-zero exit is not an error here.
    fn run(
        &self,
        program: &Path,
        args: &[String],
    ) -> impl Future<Output = Result<ExecutionResult>> + Send;
}

/// [`ProcessRunner`] backed by `tokio::process`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioProcessRunner;

impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, program: &Path, args: &[String]) -> Result<ExecutionResult> {
        log::debug!("Running: {} {}", program.display(), args.join(" "));

        let output = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|error| Error::ProcessStartFailure {
                command: format!("{} {}", program.display(), args.join(" "))
                    .trim_end()
                    .to_string(),
                error,
            })?;

        Ok(ExecutionResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Turns a non-zero exit into [`Error::NonZeroExit`].
///
/// Stdout lines are logged at error level before the failure is returned.
pub fn check_exit(result: ExecutionResult, command_line: &CommandLine) -> Result<ExecutionResult> {
    if result.success() {
        return Ok(result);
    }

    let stdout: Vec<String> = result.stdout_lines().map(str::to_string).collect();
    for line in &stdout {
        log::error!("{line}");
    }

    Err(Error::NonZeroExit {
        exit_code: result.exit_code,
        stdout,
        stderr: result.stderr.trim().to_string(),
        command: command_line.to_string(),
    })
}
