//! Additional application launchers (`--add-launcher`).

use crate::bundler::{
    error::{Error, Result},
    utils::path::PathResolver,
};
use serde::Deserialize;
use std::path::PathBuf;

/// An extra launcher defined by a name and a properties file.
///
/// ```toml
/// [[launchers]]
/// name = "myapp-cli"
/// file = "src/launchers/cli.properties"
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Launcher {
    /// Launcher name.
    pub name: String,
    /// Launcher definition file.
    pub file: Option<PathBuf>,
}

impl Launcher {
    /// Creates a launcher definition.
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            file: Some(file.into()),
        }
    }

    /// Checks the launcher and returns its resolved definition file.
    ///
    /// `index` is the launcher's position, used to identify it in errors.
    pub fn validate(&self, index: usize, resolver: &PathResolver) -> Result<PathBuf> {
        let file = match &self.file {
            Some(file) if !self.name.is_empty() && !file.as_os_str().is_empty() => file,
            _ => {
                return Err(Error::InvalidLauncher {
                    index,
                    reason: "launcher parameters cannot be null or empty".into(),
                });
            }
        };

        let file = resolver.resolve(file);
        if !file.is_file() {
            return Err(Error::InvalidLauncher {
                index,
                reason: format!("launcher file {} does not exist", file.display()),
            });
        }
        Ok(file)
    }

    /// Value of the `--add-launcher` option for an already validated file.
    pub(crate) fn option_value(&self, file: &std::path::Path) -> String {
        format!("{}={}", self.name, file.display())
    }
}
