//! Host platform selection.
//!
//! jpackage only builds packages for the platform it runs on, and several of
//! its options exist on one platform only. The bundler therefore carries an
//! explicit [`Platform`] value through argument building, executable lookup
//! and quoting instead of consulting the host OS at each decision point.
//!
//! # Platform Detection
//!
//! [`Platform::current()`] maps the compile-time target OS onto one of the
//! three supported platforms. Unix-likes other than macOS are treated as
//! Linux, since they share its conventions for paths, executables and quoting.

use std::fmt;

/// Platform jpackage is invoked for.
///
/// Exactly one platform is active per run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Microsoft Windows (`.exe`, `.msi`).
    Windows,
    /// Apple macOS (`.dmg`, `.pkg`).
    #[serde(alias = "mac")]
    #[value(name = "macos", alias = "mac")]
    MacOs,
    /// Linux (`.deb`, `.rpm`).
    Linux,
}

impl Platform {
    /// Returns the platform the binary was built for.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Maps an OS name (as reported by `std::env::consts::OS`) to a platform.
    pub fn from_os_name(os: &str) -> Self {
        match os.to_ascii_lowercase().as_str() {
            "windows" => Platform::Windows,
            "macos" | "ios" => Platform::MacOs,
            _ => Platform::Linux,
        }
    }

    /// Short lowercase identifier used in logs.
    pub fn short_name(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
        }
    }

    /// Suffix appended to executable file names.
    pub fn executable_suffix(&self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::MacOs | Platform::Linux => "",
        }
    }

    /// File name of `tool` on this platform (`jpackage.exe` on Windows).
    pub fn executable_name(&self, tool: &str) -> String {
        format!("{tool}{}", self.executable_suffix())
    }

    /// Replacement for an embedded `"` inside an escaped argument.
    ///
    /// Windows values pass through one extra level of shell quoting inside
    /// jpackage, so the quote needs a doubly escaped backslash.
    pub(crate) fn quote_replacement(&self) -> &'static str {
        match self {
            Platform::Windows => "\\\\\\\"",
            Platform::MacOs | Platform::Linux => "\\\"",
        }
    }

    /// Wrapper placed around an escaped argument that contains a space.
    pub(crate) fn space_wrapper(&self) -> &'static str {
        match self {
            Platform::Windows => "\\\"",
            Platform::MacOs | Platform::Linux => "\"",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
