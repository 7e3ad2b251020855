//! Package types accepted by `--type`.

use serde::Deserialize;
use std::fmt;

/// Package type produced by jpackage.
///
/// Accepts both the jpackage spelling (`app-image`) and the upper-case enum
/// spelling (`APP_IMAGE`) in configuration files.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageType {
    /// Unpackaged application image directory.
    #[serde(alias = "APP_IMAGE")]
    AppImage,
    /// macOS disk image.
    #[serde(alias = "DMG")]
    Dmg,
    /// macOS installer package.
    #[serde(alias = "PKG")]
    Pkg,
    /// Windows executable installer.
    #[serde(alias = "EXE")]
    Exe,
    /// Windows MSI installer.
    #[serde(alias = "MSI")]
    Msi,
    /// RPM package.
    #[serde(alias = "RPM")]
    Rpm,
    /// Debian package.
    #[serde(alias = "DEB")]
    Deb,
}

impl ImageType {
    /// Value passed to `--type`.
    pub fn value(&self) -> &'static str {
        match self {
            ImageType::AppImage => "app-image",
            ImageType::Dmg => "dmg",
            ImageType::Pkg => "pkg",
            ImageType::Exe => "exe",
            ImageType::Msi => "msi",
            ImageType::Rpm => "rpm",
            ImageType::Deb => "deb",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        kind: ImageType,
    }

    #[test]
    fn test_both_spellings_deserialize() {
        let a: Holder = toml::from_str("kind = \"app-image\"").unwrap();
        let b: Holder = toml::from_str("kind = \"APP_IMAGE\"").unwrap();
        assert_eq!(a.kind, ImageType::AppImage);
        assert_eq!(b.kind, ImageType::AppImage);
        assert_eq!(a.kind.value(), "app-image");
    }

    #[test]
    fn test_values() {
        assert_eq!(ImageType::Msi.to_string(), "msi");
        assert_eq!(ImageType::Deb.value(), "deb");
    }
}
