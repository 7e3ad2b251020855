//! Command line interface for the jpackage bundler.
//!
//! This module wires argument parsing, configuration loading and toolchain
//! discovery to the [`Packager`].

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::bundler::{
    ExecutableLocator, NoToolchains, Packager, PackagerOutcome, Platform, Settings,
    SettingsBuilder, ToolchainsFile,
};
use crate::error::{CliError, Result};
use crate::metadata::{ConfigFile, load_config};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Main CLI entry point
pub async fn run(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;
    let runtime = RuntimeConfig::from(&args);

    let config_path = args.config.absolutize()?.into_owned();
    let base_dir = match &args.base_dir {
        Some(dir) => dir.absolutize()?.into_owned(),
        None => config_dir(&config_path),
    };
    runtime.verbose_println(&format!("Configuration: {}", config_path.display()))?;

    let config = load_config(&config_path)?;
    let toolchain_version = config.toolchain_version.clone();
    let settings = build_settings(config, &args, &base_dir)?;

    let locator = match load_toolchains(args.toolchains.as_deref())? {
        Some(file) => ExecutableLocator::from_env(
            Platform::current(),
            file.with_version(toolchain_version),
        ),
        None => ExecutableLocator::from_env(Platform::current(), NoToolchains),
    };

    let build_dir = args
        .build_dir
        .clone()
        .unwrap_or_else(|| base_dir.join("target"));

    let outcome = Packager::new(settings, locator)
        .dry_run(args.dry_run)
        .build_dir(build_dir)
        .execute()
        .await?;

    match outcome {
        PackagerOutcome::Skipped => runtime.warn("Packaging skipped")?,
        PackagerOutcome::DryRun { command_line } => {
            runtime.success("Dry run: configuration is valid, jpackage not executed")?;
            runtime.indent(&command_line.to_string())?;
        }
        PackagerOutcome::Completed { command_line, .. } => {
            runtime.success("jpackage finished successfully")?;
            runtime.verbose_println(&command_line.to_string())?;
        }
    }

    Ok(0)
}

/// Parse arguments without executing
pub fn parse_args() -> Args {
    Args::parse_args()
}

fn config_dir(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// Turns the parsed configuration into [`Settings`] for the target platform.
pub fn build_settings(config: ConfigFile, args: &Args, base_dir: &Path) -> Result<Settings> {
    let mut builder = SettingsBuilder::new()
        .package_settings(config.package)
        .platform(args.platform.unwrap_or_else(Platform::current))
        .base_dir(base_dir)
        .skip(config.skip || args.skip)
        .remove_destination(config.remove_destination)
        .require_tool_version(config.require_tool_version);

    if let Some(windows) = config.windows {
        builder = builder.windows(windows);
    }
    if let Some(macos) = config.macos {
        builder = builder.macos(macos);
    }
    if let Some(linux) = config.linux {
        builder = builder.linux(linux);
    }

    Ok(builder.build()?)
}

/// Loads the toolchain registry.
///
/// An explicitly given file must load; the default location is optional.
fn load_toolchains(explicit: Option<&Path>) -> Result<Option<ToolchainsFile>> {
    if let Some(path) = explicit {
        return Ok(Some(ToolchainsFile::load(path)?));
    }

    match ToolchainsFile::default_path() {
        Some(path) if path.is_file() => Ok(Some(ToolchainsFile::load(&path)?)),
        _ => {
            log::debug!("No toolchain registry found");
            Ok(None)
        }
    }
}
