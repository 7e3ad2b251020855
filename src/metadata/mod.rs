//! Loading of `jpackage.toml`.

use crate::bundler::{LinuxSettings, MacOsSettings, PackageSettings, WindowsSettings};
use crate::error::{BundlerError, CliError, Result};
use serde::Deserialize;
use std::path::Path;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "jpackage.toml";

/// Parsed `jpackage.toml`.
///
/// Common options sit at the top level, platform options in their own
/// tables. All platform tables are parsed; only the one of the target
/// platform is used.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Platform-independent options.
    #[serde(flatten)]
    pub package: PackageSettings,

    /// `[windows]` table.
    pub windows: Option<WindowsSettings>,

    /// `[macos]` table.
    #[serde(alias = "mac")]
    pub macos: Option<MacOsSettings>,

    /// `[linux]` table.
    pub linux: Option<LinuxSettings>,

    /// Skip packaging.
    pub skip: bool,

    /// Remove the destination directory before packaging.
    pub remove_destination: bool,

    /// Fail when the jpackage version cannot be determined.
    pub require_tool_version: bool,

    /// Version of the registered JDK toolchain to use.
    pub toolchain_version: Option<String>,
}

/// Reads and parses the configuration file at `path`.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        BundlerError::Cli(CliError::ConfigUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    })?;

    parse_config(&content).map_err(|source| BundlerError::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_config(content: &str) -> std::result::Result<ConfigFile, toml::de::Error> {
    toml::from_str(content)
}
