//! Native Java application packager driven by jpackage.
//!
//! This library maps a declarative packaging configuration onto a jpackage
//! command line and runs it:
//! - option validation and version gating against the detected jpackage
//! - executable lookup through toolchains, `JAVA_HOME` and `PATH`
//! - guarded cleanup of the previous output directory
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
