//! jpackage version detection.
//!
//! The version string printed by `jpackage --version` is not rigidly
//! formatted (`22.0.1`, `23-ea`, `21.0.5 2023-10-17`), so only the leading
//! run of digits is used.

use super::runner::ProcessRunner;
use std::path::Path;

/// Argument that makes jpackage print its version.
pub const VERSION_FLAG: &str = "--version";

/// Extracts the major version from `jpackage --version` output.
///
/// Returns `0` (unknown) when the trimmed output does not start with a digit.
pub fn parse_version(output: &str) -> u32 {
    let trimmed = output.trim();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().unwrap_or(0)
}

/// Runs `executable --version` and returns the major version, or `0` when it
/// cannot be determined.
pub async fn detect_version<R: ProcessRunner>(runner: &R, executable: &Path) -> u32 {
    let result = match runner.run(executable, &[VERSION_FLAG.to_string()]).await {
        Ok(result) => result,
        Err(e) => {
            log::warn!("Failed to query jpackage version: {e}");
            return 0;
        }
    };

    if !result.success() {
        log::warn!(
            "{} {} exited with code {}: {}",
            executable.display(),
            VERSION_FLAG,
            result.exit_code,
            result.stderr.trim()
        );
        return 0;
    }

    match parse_version(&result.stdout) {
        0 => {
            log::warn!(
                "Unable to determine jpackage version from output '{}'",
                result.stdout.trim()
            );
            0
        }
        version => {
            log::info!("jpackage version: {version}");
            version
        }
    }
}
