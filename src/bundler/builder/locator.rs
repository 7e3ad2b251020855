//! Locating the jpackage executable.

use crate::bundler::{
    Platform,
    error::{Error, Result},
    toolchain::{JDK_KIND, ToolchainManager},
};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Name of the jpackage executable without platform suffix.
pub const JPACKAGE: &str = "jpackage";

/// Finds jpackage through an ordered chain of lookups.
///
/// 1. the toolchain registered under `jdk`
/// 2. `$JAVA_HOME/bin/jpackage` (with `.exe` on Windows)
/// 3. the `PATH` of the running process
///
/// A miss at any step is logged and the next step is tried.
pub struct ExecutableLocator {
    platform: Platform,
    toolchains: Box<dyn ToolchainManager + Send + Sync>,
    java_home: Option<PathBuf>,
    search_path: Option<OsString>,
    cwd: PathBuf,
}

impl ExecutableLocator {
    /// Creates a locator that consults only `toolchains`.
    pub fn new(platform: Platform, toolchains: impl ToolchainManager + Send + Sync + 'static) -> Self {
        Self {
            platform,
            toolchains: Box::new(toolchains),
            java_home: None,
            search_path: None,
            cwd: PathBuf::new(),
        }
    }

    /// Creates a locator that also reads `JAVA_HOME` and `PATH` from the
    /// process environment.
    pub fn from_env(
        platform: Platform,
        toolchains: impl ToolchainManager + Send + Sync + 'static,
    ) -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::new(platform, toolchains)
            .java_home(std::env::var_os("JAVA_HOME").map(PathBuf::from))
            .search_path(std::env::var_os("PATH"))
            .cwd(cwd)
    }

    /// Sets the JDK home to probe. Empty values are ignored.
    pub fn java_home(mut self, java_home: Option<PathBuf>) -> Self {
        self.java_home = java_home.filter(|home| !home.as_os_str().is_empty());
        self
    }

    /// Sets the `PATH`-style directory list searched last.
    pub fn search_path(mut self, search_path: Option<OsString>) -> Self {
        self.search_path = search_path.filter(|path| !path.is_empty());
        self
    }

    /// Sets the directory relative `PATH` entries are resolved against.
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// Returns the jpackage executable, or [`Error::ExecutableNotFound`].
    pub fn locate(&self) -> Result<PathBuf> {
        if let Some(path) = self.via_toolchain() {
            return Ok(path);
        }
        if let Some(path) = self.via_java_home() {
            return Ok(path);
        }
        if let Some(path) = self.via_search_path() {
            return Ok(path);
        }
        Err(Error::ExecutableNotFound { tool: JPACKAGE })
    }

    fn via_toolchain(&self) -> Option<PathBuf> {
        let Some(toolchain) = self.toolchains.toolchain(JDK_KIND) else {
            log::debug!("No {JDK_KIND} toolchain registered");
            return None;
        };
        log::info!(
            "Toolchain in use: {} {} ({})",
            toolchain.kind,
            toolchain.version.as_deref().unwrap_or("unversioned"),
            toolchain.home.display()
        );
        match toolchain.find_tool(JPACKAGE, self.platform) {
            Some(path) => {
                log::debug!("Found {} in toolchain: {}", JPACKAGE, path.display());
                Some(path)
            }
            None => {
                log::warn!(
                    "{} is missing in toolchain {}",
                    JPACKAGE,
                    toolchain.home.display()
                );
                None
            }
        }
    }

    fn via_java_home(&self) -> Option<PathBuf> {
        let Some(home) = &self.java_home else {
            log::debug!("JAVA_HOME is not set");
            return None;
        };
        let candidate = self.in_home(home);
        if candidate.is_file() {
            log::debug!("Found {} via JAVA_HOME: {}", JPACKAGE, candidate.display());
            Some(candidate)
        } else {
            log::debug!("{} not found at {}", JPACKAGE, candidate.display());
            None
        }
    }

    fn via_search_path(&self) -> Option<PathBuf> {
        let search_path = self.search_path.as_ref()?;
        let program = self.platform.executable_name(JPACKAGE);
        match which::which_in(&program, Some(search_path), &self.cwd) {
            Ok(path) => {
                log::debug!("Found {} in PATH: {}", JPACKAGE, path.display());
                Some(path)
            }
            Err(e) => {
                log::debug!("{} not found in PATH: {}", JPACKAGE, e);
                None
            }
        }
    }

    fn in_home(&self, home: &Path) -> PathBuf {
        home.join("bin").join(self.platform.executable_name(JPACKAGE))
    }
}
