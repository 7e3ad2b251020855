//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with environment
//! variable fallbacks for the settings a build pipeline usually injects.

use crate::bundler::Platform;
use crate::metadata::CONFIG_FILE;
use clap::Parser;
use std::path::PathBuf;

/// Native Java application packager driven by jpackage
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_jpackage",
    version,
    about = "Native Java application packager driven by jpackage",
    long_about = "Builds a jpackage command line from jpackage.toml, locates the JDK's jpackage,
optionally removes the previous output and runs it.

jpackage is looked up in the registered JDK toolchain, then $JAVA_HOME/bin, then PATH.

Usage:
  kodegen_bundler_jpackage
  kodegen_bundler_jpackage --config packaging/jpackage.toml --dry-run
  kodegen_bundler_jpackage --platform windows --dry-run

Exit code 0 = jpackage succeeded, was skipped, or the dry run validated."
)]
pub struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "FILE", default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory relative configuration paths are resolved against
    ///
    /// Default: the directory containing the configuration file.
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Build output root; the destination is only removed when it lies below it
    ///
    /// Default: <base dir>/target
    #[arg(long, value_name = "DIR", env = "JPACKAGE_BUILD_DIR")]
    pub build_dir: Option<PathBuf>,

    /// Toolchain registry file
    #[arg(long, value_name = "FILE", env = "JPACKAGE_TOOLCHAINS")]
    pub toolchains: Option<PathBuf>,

    /// Platform to build options for (defaults to the host)
    #[arg(short, long, value_enum, value_name = "PLATFORM")]
    pub platform: Option<Platform>,

    /// Build and validate the command line without running jpackage
    #[arg(
        long,
        env = "JPACKAGE_DRY_RUN",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub dry_run: bool,

    /// Skip packaging entirely
    #[arg(long)]
    pub skip: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.config.as_os_str().is_empty() {
            return Err("Configuration path cannot be empty".to_string());
        }

        if let Some(base_dir) = &self.base_dir
            && !base_dir.is_dir()
        {
            return Err(format!(
                "Base directory {} does not exist",
                base_dir.display()
            ));
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose),
        }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
