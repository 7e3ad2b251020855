//! Main packaging orchestration.
//!
//! This module provides the [`Packager`] that runs one jpackage invocation
//! end to end.

use super::{
    locator::ExecutableLocator,
    runner::{ExecutionResult, ProcessRunner, TokioProcessRunner, check_exit},
    tool_detection::detect_version,
};
use crate::bundler::{
    Result, Settings,
    arguments::{ArgumentBuilder, CommandLine},
    error::Error,
    utils::fs::{CleanOutcome, clean_destination},
};
use std::path::{Path, PathBuf};

/// How a packaging run ended.
#[derive(Debug)]
pub enum PackagerOutcome {
    /// `skip` was set; nothing was done.
    Skipped,
    /// The command line was built and validated but jpackage was not run.
    DryRun {
        /// The command line that would have been executed.
        command_line: CommandLine,
    },
    /// jpackage ran and exited successfully.
    Completed {
        /// The executed command line.
        command_line: CommandLine,
        /// Captured jpackage output.
        output: ExecutionResult,
    },
}

/// Runs jpackage for one set of [`Settings`].
///
/// The steps run strictly in sequence:
///
/// 1. locate the executable
/// 2. probe its version
/// 3. build and validate the command line
/// 4. clean the destination, if requested
/// 5. run jpackage and classify the exit
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_jpackage::bundler::{
///     ExecutableLocator, NoToolchains, Packager, Platform, Settings,
/// };
///
/// # async fn example(settings: Settings) -> kodegen_bundler_jpackage::bundler::Result<()> {
/// let locator = ExecutableLocator::from_env(Platform::current(), NoToolchains);
/// let outcome = Packager::new(settings, locator)
///     .build_dir("target")
///     .execute()
///     .await?;
/// println!("{outcome:?}");
/// # Ok(())
/// # }
/// ```
pub struct Packager<R: ProcessRunner = TokioProcessRunner> {
    settings: Settings,
    locator: ExecutableLocator,
    runner: R,
    dry_run: bool,
    build_dir: Option<PathBuf>,
}

impl Packager<TokioProcessRunner> {
    /// Creates a packager that spawns real processes.
    pub fn new(settings: Settings, locator: ExecutableLocator) -> Self {
        Self::with_runner(settings, locator, TokioProcessRunner)
    }
}

impl<R: ProcessRunner> Packager<R> {
    /// Creates a packager with a custom process runner.
    pub fn with_runner(settings: Settings, locator: ExecutableLocator, runner: R) -> Self {
        Self {
            settings,
            locator,
            runner,
            dry_run: false,
            build_dir: None,
        }
    }

    /// Builds and validates the command line without running jpackage.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Sets the build output root; the destination is only removed when it
    /// lies below this directory.
    ///
    /// Default: `<base dir>/target`
    pub fn build_dir(mut self, build_dir: impl Into<PathBuf>) -> Self {
        self.build_dir = Some(build_dir.into());
        self
    }

    /// Returns the process runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Runs the packaging steps.
    ///
    /// # Errors
    ///
    /// Any fatal condition aborts the run: missing executable, unknown version
    /// when required, invalid configuration, process start failure or a
    /// non-zero exit. A refused destination cleanup is logged and the run
    /// continues.
    pub async fn execute(&self) -> Result<PackagerOutcome> {
        if self.settings.skip() {
            log::info!("Skipping jpackage execution");
            return Ok(PackagerOutcome::Skipped);
        }

        let executable = self.locator.locate()?;
        log::info!("Using: {}", executable.display());

        let tool_version = detect_version(&self.runner, &executable).await;
        if tool_version == 0 && self.settings.require_tool_version() {
            return Err(Error::VersionUndetermined { executable });
        }

        let mut command_line =
            ArgumentBuilder::build(&self.settings, self.settings.platform(), tool_version)?;
        command_line.set_executable(&executable);

        if self.dry_run {
            if self.settings.remove_destination() {
                log::info!("Dry-run mode, not removing destination directory");
            }
            log::warn!("Dry-run mode, not executing jpackage");
            return Ok(PackagerOutcome::DryRun { command_line });
        }

        self.clean().await?;

        let output = self.runner.run(&executable, command_line.args()).await?;
        let output = check_exit(output, &command_line)?;
        for line in output.stdout_lines() {
            log::info!("{line}");
        }

        Ok(PackagerOutcome::Completed {
            command_line,
            output,
        })
    }

    async fn clean(&self) -> Result<()> {
        let Some(destination) = self.settings.package().destination.as_deref() else {
            return Ok(());
        };
        let destination = self.settings.resolver().resolve(destination);
        let build_dir = self.allowed_root();

        match clean_destination(&destination, &build_dir, self.settings.remove_destination())
            .await?
        {
            CleanOutcome::Refused(err) => log::error!("{err}"),
            CleanOutcome::Removed => {
                log::info!("Removed destination directory {}", destination.display())
            }
            CleanOutcome::Skipped | CleanOutcome::NotPresent => {}
        }
        Ok(())
    }

    fn allowed_root(&self) -> PathBuf {
        match &self.build_dir {
            Some(dir) => self.settings.resolver().resolve(dir),
            None => default_build_dir(self.settings.base_dir()),
        }
    }
}

fn default_build_dir(base_dir: &Path) -> PathBuf {
    base_dir.join("target")
}
