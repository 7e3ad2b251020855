//! Registered JDK toolchains.
//!
//! A toolchain registry maps a kind (always `"jdk"` for jpackage) to an
//! installation home. It is consulted before any environment-based lookup so
//! a build can pin the exact JDK it packages with.
//!
//! The registry file uses the following layout:
//!
//! ```toml
//! [[toolchain]]
//! kind = "jdk"
//! version = "21.0.5"
//! home = "/usr/lib/jvm/temurin-21"
//! ```

use crate::bundler::{
    Platform,
    error::{Error, ErrorExt, Result},
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Toolchain kind jpackage is registered under.
pub const JDK_KIND: &str = "jdk";

/// One registered toolchain.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Toolchain {
    /// Toolchain kind, e.g. `jdk`.
    pub kind: String,
    /// Version of the installation, if declared.
    #[serde(default)]
    pub version: Option<String>,
    /// Installation home directory.
    pub home: PathBuf,
}

impl Toolchain {
    /// Path of `tool` inside this toolchain, if the file exists.
    pub fn find_tool(&self, tool: &str, platform: Platform) -> Option<PathBuf> {
        let path = self.home.join("bin").join(platform.executable_name(tool));
        path.is_file().then_some(path)
    }

    fn matches(&self, kind: &str, version: Option<&str>) -> bool {
        if self.kind != kind {
            return false;
        }
        match (version, self.version.as_deref()) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(wanted), Some(actual)) => {
                actual == wanted
                    || actual
                        .strip_prefix(wanted)
                        .is_some_and(|rest| rest.starts_with(['.', '-', '+']))
            }
        }
    }
}

/// Source of registered toolchains.
pub trait ToolchainManager {
    /// Returns the toolchain registered under `kind`, if any.
    fn toolchain(&self, kind: &str) -> Option<Toolchain>;
}

/// Registry with no toolchains.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoToolchains;

impl ToolchainManager for NoToolchains {
    fn toolchain(&self, _kind: &str) -> Option<Toolchain> {
        None
    }
}

/// Toolchains loaded from a `toolchains.toml` file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ToolchainsFile {
    #[serde(default, rename = "toolchain")]
    toolchains: Vec<Toolchain>,

    #[serde(skip)]
    version: Option<String>,
}

impl ToolchainsFile {
    /// Loads and parses the registry at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).fs_context("reading toolchains file", path)?;
        let file: Self = toml::from_str(&content).map_err(|e| {
            Error::GenericError(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        log::debug!(
            "Loaded {} toolchain(s) from {}",
            file.toolchains.len(),
            path.display()
        );
        Ok(file)
    }

    /// Default registry location: `<config dir>/kodegen/toolchains.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kodegen").join("toolchains.toml"))
    }

    /// Restricts lookups to toolchains of `version`.
    ///
    /// `"21"` matches `21`, `21.0.5` and `21-ea` but not `210`.
    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    /// Registered toolchains in file order.
    pub fn toolchains(&self) -> &[Toolchain] {
        &self.toolchains
    }
}

impl ToolchainManager for ToolchainsFile {
    fn toolchain(&self, kind: &str) -> Option<Toolchain> {
        self.toolchains
            .iter()
            .find(|t| t.matches(kind, self.version.as_deref()))
            .cloned()
    }
}
