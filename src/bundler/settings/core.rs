//! Core Settings struct and implementations.

use super::{LinuxSettings, MacOsSettings, PackageSettings, WindowsSettings};
use crate::bundler::{Platform, utils::path::PathResolver};
use std::path::Path;

/// Options of the one platform the bundler runs for.
///
/// Chosen once when [`Settings`] are built, so options for other platforms
/// can never reach the command line.
#[derive(Clone, Debug)]
pub enum PlatformOptions {
    /// Windows installer options.
    Windows(WindowsSettings),
    /// macOS bundle and signing options.
    MacOs(MacOsSettings),
    /// Linux package options.
    Linux(LinuxSettings),
}

impl PlatformOptions {
    /// Platform these options belong to.
    pub fn platform(&self) -> Platform {
        match self {
            PlatformOptions::Windows(_) => Platform::Windows,
            PlatformOptions::MacOs(_) => Platform::MacOs,
            PlatformOptions::Linux(_) => Platform::Linux,
        }
    }
}

/// Complete configuration of one jpackage run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder) and immutable
/// afterwards.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_jpackage::bundler::{PackageSettings, Platform, SettingsBuilder};
///
/// # fn example() -> kodegen_bundler_jpackage::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .base_dir("/work/myapp")
///     .platform(Platform::Linux)
///     .package_settings(PackageSettings {
///         name: Some("MyApp".into()),
///         destination: Some("target/dist".into()),
///         ..Default::default()
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Platform-independent options.
    package: PackageSettings,

    /// Options of the active platform.
    platform_options: PlatformOptions,

    /// Relative paths are resolved against this directory.
    resolver: PathResolver,

    /// Skip the whole run.
    skip: bool,

    /// Remove the destination directory before running jpackage.
    remove_destination: bool,

    /// Treat an undeterminable jpackage version as fatal.
    require_tool_version: bool,
}

impl Settings {
    /// Returns the platform-independent options.
    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns the options of the active platform.
    pub fn platform_options(&self) -> &PlatformOptions {
        &self.platform_options
    }

    /// Returns the platform the settings were built for.
    pub fn platform(&self) -> Platform {
        self.platform_options.platform()
    }

    /// Returns the project base directory.
    pub fn base_dir(&self) -> &Path {
        self.resolver.base_dir()
    }

    /// Returns the resolver for configured paths.
    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Whether the run should be skipped entirely.
    pub fn skip(&self) -> bool {
        self.skip
    }

    /// Whether the destination should be removed before jpackage runs.
    pub fn remove_destination(&self) -> bool {
        self.remove_destination
    }

    /// Whether an unknown jpackage version aborts the run.
    pub fn require_tool_version(&self) -> bool {
        self.require_tool_version
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        platform_options: PlatformOptions,
        resolver: PathResolver,
        skip: bool,
        remove_destination: bool,
        require_tool_version: bool,
    ) -> Self {
        Self {
            package,
            platform_options,
            resolver,
            skip,
            remove_destination,
            require_tool_version,
        }
    }
}
