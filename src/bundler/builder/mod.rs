//! jpackage execution.
//!
//! This module provides the [`Packager`] that runs jpackage for a set of
//! [`Settings`](crate::bundler::Settings) and the pieces it is assembled from.
//!
//! # Overview
//!
//! The packager:
//! 1. Finds jpackage with [`ExecutableLocator`]
//! 2. Probes its major version with [`detect_version`]
//! 3. Builds the command line with [`ArgumentBuilder`](crate::bundler::ArgumentBuilder)
//! 4. Optionally removes the previous destination directory
//! 5. Runs jpackage through a [`ProcessRunner`] and classifies the exit
//!
//! # Module Organization
//!
//! - [`locator`] - Executable lookup chain
//! - [`orchestrator`] - Main [`Packager`] struct
//! - [`runner`] - Process spawning and exit classification
//! - [`tool_detection`] - jpackage version probing

pub mod locator;
pub mod orchestrator;
pub mod runner;
pub mod tool_detection;

pub use locator::{ExecutableLocator, JPACKAGE};
pub use orchestrator::{Packager, PackagerOutcome};
pub use runner::{ExecutionResult, ProcessRunner, TokioProcessRunner, check_exit};
pub use tool_detection::{VERSION_FLAG, detect_version, parse_version};
