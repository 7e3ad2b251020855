//! Resolution of configured paths.
//!
//! jpackage interprets relative paths against its own working directory, which
//! is not necessarily the project directory. Every configured path is made
//! absolute against the project base directory before it is emitted.

use std::path::{Path, PathBuf};

/// Resolves `raw` against `base`. Absolute paths are returned unchanged.
pub fn resolve_path(raw: &Path, base: &Path) -> PathBuf {
    if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        base.join(raw)
    }
}

/// Resolves configuration paths against a fixed base directory.
#[derive(Clone, Debug)]
pub struct PathResolver {
    base_dir: PathBuf,
}

impl PathResolver {
    /// Creates a resolver rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Base directory relative paths are joined onto.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolves `raw` against the base directory.
    pub fn resolve(&self, raw: &Path) -> PathBuf {
        resolve_path(raw, &self.base_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_absolute_path_is_unchanged() {
        let raw = Path::new("/opt/app/icon.png");
        assert_eq!(resolve_path(raw, Path::new("/work")), raw);
        assert_eq!(resolve_path(raw, Path::new("relative/base")), raw);
    }

    #[cfg(windows)]
    #[test]
    fn test_absolute_path_is_unchanged() {
        let raw = Path::new(r"C:\app\icon.ico");
        assert_eq!(resolve_path(raw, Path::new(r"D:\work")), raw);
    }

    #[test]
    fn test_relative_path_joins_base_with_separator() {
        let base = std::env::temp_dir();
        let resolved = resolve_path(Path::new("target/jmods"), &base);
        let expected = format!(
            "{}{}target{}jmods",
            base.display().to_string().trim_end_matches(std::path::MAIN_SEPARATOR),
            std::path::MAIN_SEPARATOR,
            std::path::MAIN_SEPARATOR
        );
        assert_eq!(resolved, PathBuf::from(expected));
    }

    #[test]
    fn test_resolver_uses_its_base() {
        let resolver = PathResolver::new("/project");
        assert_eq!(resolver.resolve(Path::new("icons/app.png")), Path::new("/project").join("icons/app.png"));
        assert_eq!(resolver.base_dir(), Path::new("/project"));
    }
}
