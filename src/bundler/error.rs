//! Error types for jpackage bundling.
//!
//! Every failure the invocation engine can raise lives in [`Error`]. Apart from
//! [`Error::DestinationOutsideAllowedRoot`], which the orchestrator logs and
//! moves past, all variants abort the run.
//!
//! # Features
//!
//! - **Context trait**: Attach a message to a failed result or missing value
//! - **ErrorExt trait**: Filesystem operations with automatic path context
//! - **bail! macro**: Early return with formatted error messages

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error as DeriveError;

/// Errors returned by the bundler.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// A required option (`--name`, `--dest`) is absent or empty.
    #[error("Mandatory parameter \"{parameter}\" cannot be null or empty")]
    MissingMandatoryParameter {
        /// Flag of the missing parameter
        parameter: &'static str,
    },

    /// A path option that must exist was not found on disk.
    #[error("File or directory {} does not exist (required by {parameter})", .path.display())]
    PathNotFound {
        /// Flag the path was configured for
        parameter: &'static str,
        /// Absolute path that was checked
        path: PathBuf,
    },

    /// A launcher sub-record failed validation.
    #[error("Launcher #{index} is invalid: {reason}")]
    InvalidLauncher {
        /// Zero-based position in the launcher list
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// The detected jpackage release does not accept a configured flag.
    #[error(
        "{parameter} is not supported by jpackage {tool_version} (supported range: {})",
        describe_range(.since, .until)
    )]
    UnsupportedByVersion {
        /// Rejected flag
        parameter: &'static str,
        /// Detected major version
        tool_version: u32,
        /// First release accepting the flag
        since: Option<u32>,
        /// Last release accepting the flag
        until: Option<u32>,
    },

    /// No lookup strategy produced an executable.
    #[error("Failed to find {tool}")]
    ExecutableNotFound {
        /// Tool that was searched for
        tool: &'static str,
    },

    /// Version gating is required but the probe returned nothing usable.
    #[error("Unable to determine the version of {}", .executable.display())]
    VersionUndetermined {
        /// Executable that was probed
        executable: PathBuf,
    },

    /// The operating system refused to start the process.
    #[error("Error while executing {command}: {error}")]
    ProcessStartFailure {
        /// Command line that was being started
        command: String,
        /// The underlying error
        error: io::Error,
    },

    /// The tool ran and reported failure.
    #[error("{}", describe_exit(.exit_code, .stdout, .stderr, .command))]
    NonZeroExit {
        /// Exit code reported by the process
        exit_code: i32,
        /// Captured stdout, one entry per line
        stdout: Vec<String>,
        /// Captured stderr
        stderr: String,
        /// Full command line for reproduction
        command: String,
    },

    /// Cleanup refused to touch a directory outside the build output tree.
    #[error(
        "Refusing to remove {}: it is not inside {}",
        .destination.display(),
        .allowed_root.display()
    )]
    DestinationOutsideAllowedRoot {
        /// Directory that was asked to be removed
        destination: PathBuf,
        /// Tree inside which removal is allowed
        allowed_root: PathBuf,
    },

    /// Error with context. Created by the [`Context`] trait.
    #[error("{0}: {1}")]
    Context(String, Box<Self>),

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {path}: {error}")]
    Fs {
        /// Context describing the operation (e.g., "removing file")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// Error walking a directory tree during cleanup.
    #[error("{0}")]
    WalkdirError(#[from] walkdir::Error),

    /// Generic error with custom message.
    #[error("{0}")]
    GenericError(String),
}

fn describe_range(since: &Option<u32>, until: &Option<u32>) -> String {
    match (*since, *until) {
        (Some(since), Some(until)) => format!("{since}..={until}"),
        (Some(since), None) => format!("{since} and later"),
        (None, Some(until)) => format!("up to {until}"),
        (None, None) => "any".to_string(),
    }
}

fn describe_exit(exit_code: &i32, stdout: &[String], stderr: &str, command: &str) -> String {
    let mut msg = String::new();
    for line in stdout {
        msg.push_str(line);
        msg.push('\n');
    }
    msg.push_str(&format!("\nExit code: {exit_code}"));
    if !stderr.trim().is_empty() {
        msg.push_str(" - ");
        msg.push_str(stderr.trim_end());
    }
    msg.push('\n');
    msg.push_str(&format!("Command line was: {command}\n"));
    msg
}

impl Error {
    /// Whether the orchestrator should log this error and keep going.
    pub fn is_non_fatal(&self) -> bool {
        matches!(self, Error::DestinationOutsideAllowedRoot { .. })
    }

    pub(crate) fn path_not_found(parameter: &'static str, path: &Path) -> Self {
        Error::PathNotFound {
            parameter,
            path: path.to_path_buf(),
        }
    }
}

/// Convenient type alias for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for adding context to errors.
///
/// Works with both bundler results and `Option<T>`.
pub trait Context<T> {
    /// Add context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

/// Extension trait for filesystem operations with automatic path context.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the operation,
    /// e.g., "removing file", "reading toolchains".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Macro for early return with error.
///
/// Converts the message into a [`Error::GenericError`] and returns immediately.
///
/// ```ignore
/// bail!("operation failed");
/// bail!("invalid value: {}", value);
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::error::Error::GenericError($msg.into()))
    };
    ($err:expr $(,)?) => {
        return Err($crate::bundler::error::Error::GenericError($err.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::bundler::error::Error::GenericError(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_zero_exit_message_contains_everything() {
        let err = Error::NonZeroExit {
            exit_code: 2,
            stdout: vec!["Bundler failed".into(), "see log".into()],
            stderr: "Error: Invalid Option: [--bogus]".into(),
            command: "jpackage --name App --bogus".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Bundler failed\nsee log\n"));
        assert!(msg.contains("Exit code: 2 - Error: Invalid Option: [--bogus]"));
        assert!(msg.contains("Command line was: jpackage --name App --bogus"));
    }

    #[test]
    fn test_unsupported_range_wording() {
        let err = Error::UnsupportedByVersion {
            parameter: "--about-url",
            tool_version: 16,
            since: Some(17),
            until: None,
        };
        assert_eq!(
            err.to_string(),
            "--about-url is not supported by jpackage 16 (supported range: 17 and later)"
        );
    }

    #[test]
    fn test_only_cleanup_refusal_is_non_fatal() {
        let refusal = Error::DestinationOutsideAllowedRoot {
            destination: "/tmp/out".into(),
            allowed_root: "/work/target".into(),
        };
        assert!(refusal.is_non_fatal());
        assert!(!Error::ExecutableNotFound { tool: "jpackage" }.is_non_fatal());
    }

    #[test]
    fn test_option_context() {
        let missing: Option<u32> = None;
        let err = missing.context("no value").unwrap_err();
        assert_eq!(err.to_string(), "no value");
    }
}
