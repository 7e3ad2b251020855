//! Builder for constructing Settings.

use super::{
    LinuxSettings, MacOsSettings, PackageSettings, PlatformOptions, Settings, WindowsSettings,
};
use crate::bundler::{
    Platform,
    error::{Context, ErrorExt},
    utils::path::PathResolver,
};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Platform bundles for every platform may be supplied; only the one matching
/// the selected [`Platform`] is kept.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_jpackage::bundler::{
///     PackageSettings, Platform, SettingsBuilder, WindowsSettings,
/// };
///
/// # fn example() -> kodegen_bundler_jpackage::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .platform(Platform::Windows)
///     .package_settings(PackageSettings {
///         name: Some("MyApp".into()),
///         destination: Some("target/dist".into()),
///         ..Default::default()
///     })
///     .windows(WindowsSettings {
///         menu: true,
///         ..Default::default()
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    package_settings: Option<PackageSettings>,
    platform: Option<Platform>,
    base_dir: Option<PathBuf>,
    windows: Option<WindowsSettings>,
    macos: Option<MacOsSettings>,
    linux: Option<LinuxSettings>,
    skip: bool,
    remove_destination: bool,
    require_tool_version: bool,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the platform-independent options.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Sets the platform to build for.
    ///
    /// Default: [`Platform::current()`]
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Sets the directory relative paths are resolved against.
    ///
    /// Default: current working directory
    pub fn base_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.base_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the Windows options.
    pub fn windows(mut self, settings: WindowsSettings) -> Self {
        self.windows = Some(settings);
        self
    }

    /// Sets the macOS options.
    pub fn macos(mut self, settings: MacOsSettings) -> Self {
        self.macos = Some(settings);
        self
    }

    /// Sets the Linux options.
    pub fn linux(mut self, settings: LinuxSettings) -> Self {
        self.linux = Some(settings);
        self
    }

    /// Skips the run entirely.
    ///
    /// Default: false
    pub fn skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    /// Removes the destination directory before running jpackage.
    ///
    /// Default: false
    pub fn remove_destination(mut self, remove: bool) -> Self {
        self.remove_destination = remove;
        self
    }

    /// Fails the run when the jpackage version cannot be determined.
    ///
    /// Default: false (unknown version disables version checks)
    pub fn require_tool_version(mut self, require: bool) -> Self {
        self.require_tool_version = require;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `package_settings` is missing or the current
    /// directory cannot be determined when no base directory was given.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        let platform = self.platform.unwrap_or_else(Platform::current);

        let base_dir = match self.base_dir {
            Some(dir) => dir,
            None => std::env::current_dir().fs_context("reading current directory", ".")?,
        };

        let ignored: Vec<&str> = [
            (Platform::Windows, self.windows.is_some()),
            (Platform::MacOs, self.macos.is_some()),
            (Platform::Linux, self.linux.is_some()),
        ]
        .into_iter()
        .filter(|(p, present)| *present && *p != platform)
        .map(|(p, _)| p.short_name())
        .collect();
        if !ignored.is_empty() {
            log::debug!(
                "Ignoring {} options when building for {}",
                ignored.join(", "),
                platform
            );
        }

        let platform_options = match platform {
            Platform::Windows => PlatformOptions::Windows(self.windows.unwrap_or_default()),
            Platform::MacOs => PlatformOptions::MacOs(self.macos.unwrap_or_default()),
            Platform::Linux => PlatformOptions::Linux(self.linux.unwrap_or_default()),
        };

        Ok(Settings::new(
            self.package_settings
                .context("package_settings is required")?,
            platform_options,
            PathResolver::new(base_dir),
            self.skip,
            self.remove_destination,
            self.require_tool_version,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_selected_platform_is_kept() {
        let settings = SettingsBuilder::new()
            .platform(Platform::MacOs)
            .base_dir("/work")
            .package_settings(PackageSettings::default())
            .windows(WindowsSettings {
                menu: true,
                ..Default::default()
            })
            .macos(MacOsSettings {
                sign: true,
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(settings.platform(), Platform::MacOs);
        match settings.platform_options() {
            PlatformOptions::MacOs(mac) => assert!(mac.sign),
            other => panic!("unexpected options {other:?}"),
        }
    }

    #[test]
    fn test_missing_platform_bundle_defaults() {
        let settings = SettingsBuilder::new()
            .platform(Platform::Linux)
            .base_dir("/work")
            .package_settings(PackageSettings::default())
            .build()
            .unwrap();
        match settings.platform_options() {
            PlatformOptions::Linux(linux) => assert!(!linux.shortcut),
            other => panic!("unexpected options {other:?}"),
        }
        assert_eq!(settings.base_dir(), Path::new("/work"));
        assert!(!settings.skip());
        assert!(!settings.remove_destination());
    }

    #[test]
    fn test_package_settings_required() {
        assert!(SettingsBuilder::new().base_dir("/work").build().is_err());
    }
}
