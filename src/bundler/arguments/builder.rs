//! Mapping of [`Settings`] onto the jpackage command line.

use super::{CommandLine, escape};
use crate::bundler::{
    Platform,
    error::{Error, Result},
    parameters::{self, ParameterDescriptor, ParameterId, ValueKind},
    settings::{LinuxSettings, MacOsSettings, PlatformOptions, Settings, WindowsSettings},
};
use std::path::{Path, PathBuf};

/// Walks the settings in jpackage's canonical option order and emits every
/// configured option.
///
/// Validation is interleaved with emission: the first missing file or
/// version-gated flag aborts the build and the partial command line is
/// dropped.
pub struct ArgumentBuilder<'a> {
    settings: &'a Settings,
    platform: Platform,
    tool_version: u32,
    command_line: CommandLine,
}

impl<'a> ArgumentBuilder<'a> {
    /// Builds the command line for `settings`.
    ///
    /// `tool_version` is the detected jpackage major version; `0` means
    /// unknown and disables version gating. Only the options of `platform`
    /// are emitted.
    pub fn build(settings: &'a Settings, platform: Platform, tool_version: u32) -> Result<CommandLine> {
        let package = settings.package();
        let name = package
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(Error::MissingMandatoryParameter { parameter: "name" })?;
        let destination = package
            .destination
            .as_deref()
            .filter(|dest| !dest.as_os_str().is_empty())
            .ok_or(Error::MissingMandatoryParameter {
                parameter: "destination",
            })?;

        let mut builder = Self {
            settings,
            platform,
            tool_version,
            command_line: CommandLine::new(),
        };

        log::info!("jpackage options:");
        builder.value(ParameterId::Name, Some(name))?;
        builder.path(ParameterId::Destination, Some(destination))?;
        builder.common()?;
        builder.repeated_paths()?;
        builder.lists()?;
        builder.launchers()?;

        for option in package.additional_options.iter().filter(|o| !o.is_empty()) {
            log::info!("  {option}");
            builder.command_line.push_flag(option);
        }

        builder.platform_bundle()?;
        Ok(builder.command_line)
    }

    fn common(&mut self) -> Result<()> {
        let package = self.settings.package();
        let image_type = package.image_type.map(|t| t.value());

        self.flag(ParameterId::Verbose, package.verbose)?;
        self.value(ParameterId::Type, image_type)?;
        self.value(ParameterId::AppVersion, package.app_version.as_deref())?;
        self.value(ParameterId::Copyright, package.copyright.as_deref())?;
        self.value(ParameterId::Description, package.description.as_deref())?;
        self.path(ParameterId::RuntimeImage, package.runtime_image.as_deref())?;
        self.path(ParameterId::Input, package.input.as_deref())?;
        self.value(ParameterId::InstallDir, package.install_dir.as_deref())?;
        self.path(ParameterId::ResourceDir, package.resource_dir.as_deref())?;
        self.value(ParameterId::Vendor, package.vendor.as_deref())?;
        self.value(ParameterId::Module, package.module.as_deref())?;
        self.value(ParameterId::MainClass, package.main_class.as_deref())?;
        self.value(ParameterId::MainJar, package.main_jar.as_deref())?;
        self.path(ParameterId::Temp, package.temp.as_deref())?;
        self.path(ParameterId::Icon, package.icon.as_deref())?;
        self.path(ParameterId::LicenseFile, package.license_file.as_deref())?;
        self.value(ParameterId::AboutUrl, package.about_url.as_deref())?;
        self.path(ParameterId::AppImage, package.app_image.as_deref())?;
        self.flag(ParameterId::LauncherAsService, package.launcher_as_service)
    }

    fn repeated_paths(&mut self) -> Result<()> {
        let package = self.settings.package();
        for path in &package.module_paths {
            self.path(ParameterId::ModulePath, Some(path))?;
        }
        for path in &package.file_associations {
            self.path(ParameterId::FileAssociations, Some(path))?;
        }
        for path in &package.app_content_paths {
            self.path(ParameterId::AppContent, Some(path))?;
        }
        if let (Platform::MacOs, PlatformOptions::MacOs(mac)) =
            (self.platform, self.settings.platform_options())
        {
            for path in &mac.dmg_content_paths {
                self.path(ParameterId::MacDmgContent, Some(path))?;
            }
        }
        Ok(())
    }

    fn lists(&mut self) -> Result<()> {
        let package = self.settings.package();
        if !package.add_modules.is_empty() {
            self.value(ParameterId::AddModules, Some(&package.add_modules.join(",")))?;
        }
        if !package.jlink_options.is_empty() {
            self.value(ParameterId::JlinkOptions, Some(&package.jlink_options.join(" ")))?;
        }
        for option in &package.java_options {
            self.value(ParameterId::JavaOptions, Some(&escape(option, self.platform)))?;
        }
        for argument in &package.arguments {
            self.value(ParameterId::Arguments, Some(&escape(argument, self.platform)))?;
        }
        Ok(())
    }

    fn launchers(&mut self) -> Result<()> {
        let resolver = self.settings.resolver();
        for (index, launcher) in self.settings.package().launchers.iter().enumerate() {
            let file = launcher.validate(index, resolver)?;
            self.value(ParameterId::AddLauncher, Some(&launcher.option_value(&file)))?;
        }
        Ok(())
    }

    fn platform_bundle(&mut self) -> Result<()> {
        match (self.platform, self.settings.platform_options()) {
            (Platform::Windows, PlatformOptions::Windows(windows)) => self.windows(windows),
            (Platform::MacOs, PlatformOptions::MacOs(mac)) => self.macos(mac),
            (Platform::Linux, PlatformOptions::Linux(linux)) => self.linux(linux),
            (platform, options) => {
                log::debug!(
                    "No {} options configured, settings hold {} options",
                    platform,
                    options.platform()
                );
                Ok(())
            }
        }
    }

    fn windows(&mut self, windows: &WindowsSettings) -> Result<()> {
        self.flag(ParameterId::WinMenu, windows.menu)?;
        self.flag(ParameterId::WinDirChooser, windows.dir_chooser)?;
        self.value(ParameterId::WinUpgradeUuid, windows.upgrade_uuid.as_deref())?;
        self.value(ParameterId::WinMenuGroup, windows.menu_group.as_deref())?;
        self.flag(ParameterId::WinShortcut, windows.shortcut)?;
        self.flag(ParameterId::WinShortcutPrompt, windows.shortcut_prompt)?;
        self.flag(ParameterId::WinPerUserInstall, windows.per_user_install)?;
        self.flag(ParameterId::WinConsole, windows.console)?;
        self.value(ParameterId::WinHelpUrl, windows.help_url.as_deref())?;
        self.value(ParameterId::WinUpdateUrl, windows.update_url.as_deref())
    }

    fn macos(&mut self, mac: &MacOsSettings) -> Result<()> {
        self.value(ParameterId::MacPackageIdentifier, mac.package_identifier.as_deref())?;
        self.value(ParameterId::MacPackageName, mac.package_name.as_deref())?;
        self.value(
            ParameterId::MacPackageSigningPrefix,
            mac.package_signing_prefix.as_deref(),
        )?;
        self.flag(ParameterId::MacSign, mac.sign)?;
        self.path(ParameterId::MacSigningKeychain, mac.signing_keychain.as_deref())?;
        self.value(
            ParameterId::MacSigningKeyUserName,
            mac.signing_key_user_name.as_deref(),
        )?;
        self.flag(ParameterId::MacAppStore, mac.app_store)?;
        self.path(ParameterId::MacEntitlements, mac.entitlements.as_deref())?;
        self.value(ParameterId::MacAppCategory, mac.app_category.as_deref())
    }

    fn linux(&mut self, linux: &LinuxSettings) -> Result<()> {
        self.value(ParameterId::LinuxPackageName, linux.package_name.as_deref())?;
        self.value(ParameterId::LinuxDebMaintainer, linux.deb_maintainer.as_deref())?;
        self.value(ParameterId::LinuxMenuGroup, linux.menu_group.as_deref())?;
        self.value(ParameterId::LinuxPackageDeps, linux.package_deps.as_deref())?;
        self.value(ParameterId::LinuxRpmLicenseType, linux.rpm_license_type.as_deref())?;
        self.value(ParameterId::LinuxAppRelease, linux.app_release.as_deref())?;
        self.value(ParameterId::LinuxAppCategory, linux.app_category.as_deref())?;
        self.flag(ParameterId::LinuxShortcut, linux.shortcut)
    }

    /// Looks up the descriptor of `id` and applies version gating.
    fn descriptor(&self, id: ParameterId) -> Result<&'static ParameterDescriptor> {
        let descriptor = parameters::lookup(id)
            .ok_or_else(|| Error::GenericError(format!("{id:?} is not a jpackage option")))?;
        if self.tool_version != 0 {
            parameters::check_version_support(descriptor, self.tool_version)?;
        }
        Ok(descriptor)
    }

    fn flag(&mut self, id: ParameterId, enabled: bool) -> Result<()> {
        if !enabled {
            return Ok(());
        }
        let descriptor = self.descriptor(id)?;
        debug_assert_eq!(descriptor.kind, ValueKind::Flag);
        log::info!("  {}", descriptor.flag);
        self.command_line.push_flag(descriptor.flag);
        Ok(())
    }

    fn value(&mut self, id: ParameterId, value: Option<&str>) -> Result<()> {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return Ok(());
        };
        let descriptor = self.descriptor(id)?;
        log::info!("  {} {}", descriptor.flag, value);
        self.command_line.push_value(descriptor.flag, value);
        Ok(())
    }

    fn path(&mut self, id: ParameterId, path: Option<&Path>) -> Result<()> {
        let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(());
        };
        let descriptor = self.descriptor(id)?;
        debug_assert_eq!(descriptor.kind, ValueKind::Path);

        let resolved: PathBuf = self.settings.resolver().resolve(path);
        if descriptor.must_exist && !resolved.exists() {
            return Err(Error::path_not_found(descriptor.flag, &resolved));
        }

        let value = resolved.display().to_string();
        log::info!("  {} {}", descriptor.flag, value);
        self.command_line.push_value(descriptor.flag, value);
        Ok(())
    }
}
