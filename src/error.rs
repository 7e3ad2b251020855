//! Error types for the command line front end.
//!
//! This module defines the crate-level error with actionable messages and
//! recovery suggestions.

use crate::bundler::Error as PackagingError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for front end operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all front end operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file errors
    #[error("Invalid configuration {path}: {source}")]
    Config {
        /// Configuration file
        path: PathBuf,
        /// Parse failure
        source: toml::de::Error,
    },

    /// Packaging errors
    #[error("{0}")]
    Bundler(#[from] PackagingError),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Configuration file could not be read
    #[error("Cannot read {path}: {reason}")]
    ConfigUnreadable {
        /// Configuration file
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            BundlerError::Cli(CliError::ConfigUnreadable { path, .. }) => vec![
                format!("Create {} or point --config at an existing file", path.display()),
            ],
            BundlerError::Cli(_) => vec!["Run with --help to see the accepted arguments".to_string()],
            BundlerError::Config { .. } => vec![
                "Check the key names and value types in the configuration file".to_string(),
                "Paths and strings must be quoted TOML strings".to_string(),
            ],
            BundlerError::Bundler(err) => packaging_suggestions(err),
            BundlerError::Io(_) => {
                vec!["Check the error message above for specific details".to_string()]
            }
        }
    }
}

fn packaging_suggestions(err: &PackagingError) -> Vec<String> {
    match err {
        PackagingError::MissingMandatoryParameter { parameter } => {
            vec![format!("Set `{parameter}` in jpackage.toml")]
        }
        PackagingError::PathNotFound { path, .. } => vec![
            format!("Create {} or fix the configured path", path.display()),
            "Relative paths are resolved against the configuration directory".to_string(),
        ],
        PackagingError::InvalidLauncher { index, .. } => vec![format!(
            "Give launcher #{index} a non-empty name and an existing properties file"
        )],
        PackagingError::UnsupportedByVersion { parameter, .. } => vec![
            format!("Remove {parameter} from the configuration"),
            "Or register a newer JDK in toolchains.toml / JAVA_HOME".to_string(),
        ],
        PackagingError::ExecutableNotFound { .. } => vec![
            "Set JAVA_HOME to a JDK 14 or later".to_string(),
            "Or register a JDK toolchain in toolchains.toml".to_string(),
        ],
        PackagingError::VersionUndetermined { executable } => vec![
            format!("Run `{} --version` manually", executable.display()),
            "Or set require_tool_version = false".to_string(),
        ],
        PackagingError::ProcessStartFailure { .. } => {
            vec!["Check that the jpackage executable is present and executable".to_string()]
        }
        PackagingError::NonZeroExit { .. } => vec![
            "Re-run with verbose = true for jpackage diagnostics".to_string(),
            "The failing command line is shown above and can be run manually".to_string(),
        ],
        _ => vec!["Check the error message above for specific details".to_string()],
    }
}
