//! Table of jpackage options known to the bundler.
//!
//! Each configuration field is identified by a [`ParameterId`]. Fields that end
//! up on the jpackage command line have a [`ParameterDescriptor`] describing the
//! flag, the shape of its value, whether a path value must already exist, and
//! the range of jpackage releases that accept it. Meta fields (skip, destination
//! cleanup, raw pass-through options) have no descriptor.
//!
//! jpackage gained options release over release (it shipped incubating in
//! JDK 14), so the version bounds let the argument builder refuse a flag the
//! detected tool would reject anyway.

use crate::bundler::error::{Error, Result};
use std::{collections::HashMap, sync::LazyLock};

/// Shape of the value that follows a flag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueKind {
    /// Bare flag, emitted when the boolean field is true.
    Flag,
    /// Flag followed by a string value.
    Value,
    /// Flag followed by a path resolved against the base directory.
    Path,
}

/// Static metadata for one jpackage option.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParameterDescriptor {
    /// Flag as written on the command line, e.g. `--main-jar`.
    pub flag: &'static str,
    /// Value shape.
    pub kind: ValueKind,
    /// First jpackage major version accepting the flag (inclusive).
    pub since: Option<u32>,
    /// Last jpackage major version accepting the flag (inclusive).
    pub until: Option<u32>,
    /// Path values must exist on disk before the flag is emitted.
    pub must_exist: bool,
}

impl ParameterDescriptor {
    const fn new(flag: &'static str, kind: ValueKind) -> Self {
        Self {
            flag,
            kind,
            since: Some(JPACKAGE_FIRST_RELEASE),
            until: None,
            must_exist: false,
        }
    }

    const fn existing(mut self) -> Self {
        self.must_exist = true;
        self
    }

    const fn since(mut self, version: u32) -> Self {
        self.since = Some(version);
        self
    }

    /// Whether jpackage `version` accepts this flag. Unbounded ends accept anything.
    pub fn supports(&self, version: u32) -> bool {
        self.since.is_none_or(|since| version >= since)
            && self.until.is_none_or(|until| version <= until)
    }
}

/// First JDK release that shipped jpackage.
pub const JPACKAGE_FIRST_RELEASE: u32 = 14;

/// Identifier of every configuration field.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ParameterId {
    Name,
    Destination,
    Verbose,
    Type,
    AppVersion,
    Copyright,
    Description,
    RuntimeImage,
    Input,
    InstallDir,
    ResourceDir,
    Vendor,
    Module,
    MainClass,
    MainJar,
    Temp,
    Icon,
    LicenseFile,
    AboutUrl,
    AppImage,
    LauncherAsService,
    ModulePath,
    FileAssociations,
    AppContent,
    AddModules,
    JlinkOptions,
    JavaOptions,
    Arguments,
    AddLauncher,
    AdditionalOptions,
    Skip,
    RemoveDestination,

    WinMenu,
    WinMenuGroup,
    WinDirChooser,
    WinUpgradeUuid,
    WinShortcut,
    WinShortcutPrompt,
    WinPerUserInstall,
    WinConsole,
    WinHelpUrl,
    WinUpdateUrl,

    MacPackageIdentifier,
    MacPackageName,
    MacPackageSigningPrefix,
    MacSign,
    MacSigningKeychain,
    MacSigningKeyUserName,
    MacAppStore,
    MacEntitlements,
    MacAppCategory,
    MacDmgContent,

    LinuxPackageName,
    LinuxDebMaintainer,
    LinuxMenuGroup,
    LinuxPackageDeps,
    LinuxRpmLicenseType,
    LinuxAppRelease,
    LinuxAppCategory,
    LinuxShortcut,
}

static DESCRIPTORS: LazyLock<HashMap<ParameterId, ParameterDescriptor>> = LazyLock::new(|| {
    use ParameterId::*;
    use ValueKind::{Flag, Path, Value};

    let d = ParameterDescriptor::new;
    HashMap::from([
        (Name, d("--name", Value)),
        (Destination, d("--dest", Path)),
        (Verbose, d("--verbose", Flag)),
        (Type, d("--type", Value)),
        (AppVersion, d("--app-version", Value)),
        (Copyright, d("--copyright", Value)),
        (Description, d("--description", Value)),
        (RuntimeImage, d("--runtime-image", Path).existing()),
        (Input, d("--input", Path).existing()),
        (InstallDir, d("--install-dir", Value)),
        (ResourceDir, d("--resource-dir", Path).existing()),
        (Vendor, d("--vendor", Value)),
        (Module, d("--module", Value)),
        (MainClass, d("--main-class", Value)),
        (MainJar, d("--main-jar", Value)),
        (Temp, d("--temp", Path)),
        (Icon, d("--icon", Path).existing()),
        (LicenseFile, d("--license-file", Path).existing()),
        (AboutUrl, d("--about-url", Value).since(17)),
        (AppImage, d("--app-image", Path).existing()),
        (LauncherAsService, d("--launcher-as-service", Flag).since(19)),
        (ModulePath, d("--module-path", Path).existing()),
        (FileAssociations, d("--file-associations", Path).existing()),
        (AppContent, d("--app-content", Path).existing().since(18)),
        (AddModules, d("--add-modules", Value)),
        (JlinkOptions, d("--jlink-options", Value).since(16)),
        (JavaOptions, d("--java-options", Value)),
        (Arguments, d("--arguments", Value)),
        (AddLauncher, d("--add-launcher", Value)),
        (WinMenu, d("--win-menu", Flag)),
        (WinMenuGroup, d("--win-menu-group", Value)),
        (WinDirChooser, d("--win-dir-chooser", Flag)),
        (WinUpgradeUuid, d("--win-upgrade-uuid", Value)),
        (WinShortcut, d("--win-shortcut", Flag)),
        (WinShortcutPrompt, d("--win-shortcut-prompt", Flag).since(17)),
        (WinPerUserInstall, d("--win-per-user-install", Flag)),
        (WinConsole, d("--win-console", Flag)),
        (WinHelpUrl, d("--win-help-url", Value).since(17)),
        (WinUpdateUrl, d("--win-update-url", Value).since(17)),
        (MacPackageIdentifier, d("--mac-package-identifier", Value)),
        (MacPackageName, d("--mac-package-name", Value)),
        (MacPackageSigningPrefix, d("--mac-package-signing-prefix", Value)),
        (MacSign, d("--mac-sign", Flag)),
        (MacSigningKeychain, d("--mac-signing-keychain", Path).existing()),
        (MacSigningKeyUserName, d("--mac-signing-key-user-name", Value)),
        (MacAppStore, d("--mac-app-store", Flag).since(17)),
        (MacEntitlements, d("--mac-entitlements", Path).existing().since(17)),
        (MacAppCategory, d("--mac-app-category", Value).since(17)),
        (MacDmgContent, d("--mac-dmg-content", Path).existing().since(18)),
        (LinuxPackageName, d("--linux-package-name", Value)),
        (LinuxDebMaintainer, d("--linux-deb-maintainer", Value)),
        (LinuxMenuGroup, d("--linux-menu-group", Value)),
        (LinuxPackageDeps, d("--linux-package-deps", Value)),
        (LinuxRpmLicenseType, d("--linux-rpm-license-type", Value)),
        (LinuxAppRelease, d("--linux-app-release", Value)),
        (LinuxAppCategory, d("--linux-app-category", Value)),
        (LinuxShortcut, d("--linux-shortcut", Flag)),
    ])
});

/// Returns the descriptor for `id`, or `None` for fields that never reach the
/// command line.
pub fn lookup(id: ParameterId) -> Option<&'static ParameterDescriptor> {
    DESCRIPTORS.get(&id)
}

/// Fails when `tool_version` lies outside the descriptor's supported range.
pub fn check_version_support(descriptor: &ParameterDescriptor, tool_version: u32) -> Result<()> {
    if descriptor.supports(tool_version) {
        Ok(())
    } else {
        Err(Error::UnsupportedByVersion {
            parameter: descriptor.flag,
            tool_version,
            since: descriptor.since,
            until: descriptor.until,
        })
    }
}
