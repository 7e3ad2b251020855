//! Windows-only jpackage options.

use serde::Deserialize;

/// Windows installer options.
///
/// # Configuration
///
/// ```toml
/// [windows]
/// menu = true
/// menu_group = "Example"
/// upgrade_uuid = "2a6d1a41-f0f1-4c8b-9b8c-0d6c7b1b6a2e"
/// ```
///
/// Only emitted when the bundler runs for [`Platform::Windows`](crate::bundler::Platform).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct WindowsSettings {
    /// `--win-menu`: add a Start menu shortcut.
    pub menu: bool,

    /// `--win-menu-group`: Start menu group.
    pub menu_group: Option<String>,

    /// `--win-dir-chooser`: let the user pick the install directory.
    pub dir_chooser: bool,

    /// `--win-upgrade-uuid`: upgrade code shared by all versions.
    pub upgrade_uuid: Option<String>,

    /// `--win-shortcut`: add a desktop shortcut.
    pub shortcut: bool,

    /// `--win-shortcut-prompt` (jpackage 17+)
    pub shortcut_prompt: bool,

    /// `--win-per-user-install`
    pub per_user_install: bool,

    /// `--win-console`: console launcher.
    pub console: bool,

    /// `--win-help-url` (jpackage 17+)
    pub help_url: Option<String>,

    /// `--win-update-url` (jpackage 17+)
    pub update_url: Option<String>,
}
