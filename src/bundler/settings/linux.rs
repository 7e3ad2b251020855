//! Linux-only jpackage options.

use serde::Deserialize;

/// Linux package options for `.deb` and `.rpm`.
///
/// # Configuration
///
/// ```toml
/// [linux]
/// package_name = "myapp"
/// deb_maintainer = "dev@example.com"
/// shortcut = true
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LinuxSettings {
    /// `--linux-package-name`
    pub package_name: Option<String>,

    /// `--linux-deb-maintainer`
    pub deb_maintainer: Option<String>,

    /// `--linux-menu-group`
    pub menu_group: Option<String>,

    /// `--linux-package-deps`
    pub package_deps: Option<String>,

    /// `--linux-rpm-license-type`
    pub rpm_license_type: Option<String>,

    /// `--linux-app-release`
    pub app_release: Option<String>,

    /// `--linux-app-category`
    pub app_category: Option<String>,

    /// `--linux-shortcut`
    pub shortcut: bool,
}
