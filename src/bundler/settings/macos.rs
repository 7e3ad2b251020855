//! macOS-only jpackage options.

use serde::Deserialize;
use std::path::PathBuf;

/// macOS bundle and signing options.
///
/// # Configuration
///
/// ```toml
/// [macos]
/// package_identifier = "com.example.app"
/// sign = true
/// signing_key_user_name = "Example Inc. (ABCDE12345)"
/// ```
///
/// Signing itself is performed by jpackage; these options are passed through.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MacOsSettings {
    /// `--mac-package-identifier`
    pub package_identifier: Option<String>,

    /// `--mac-package-name`
    pub package_name: Option<String>,

    /// `--mac-package-signing-prefix`
    pub package_signing_prefix: Option<String>,

    /// `--mac-sign`
    pub sign: bool,

    /// `--mac-signing-keychain`. Must exist.
    pub signing_keychain: Option<PathBuf>,

    /// `--mac-signing-key-user-name`
    pub signing_key_user_name: Option<String>,

    /// `--mac-app-store` (jpackage 17+)
    pub app_store: bool,

    /// `--mac-entitlements` (jpackage 17+). Must exist.
    pub entitlements: Option<PathBuf>,

    /// `--mac-app-category` (jpackage 17+)
    pub app_category: Option<String>,

    /// `--mac-dmg-content` (jpackage 18+), one flag per entry. Each must exist.
    #[serde(alias = "dmg_content")]
    pub dmg_content_paths: Vec<PathBuf>,
}
