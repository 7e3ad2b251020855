//! File system utilities for bundling.
//!
//! Destination cleanup removes the previous jpackage output before a new run,
//! guarded so that nothing outside the build output tree is ever deleted.

use crate::bail;
use crate::bundler::error::{Error, ErrorExt, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Result of a destination cleanup request.
#[derive(Debug)]
pub enum CleanOutcome {
    /// The destination directory and all of its contents were deleted.
    Removed,
    /// Cleanup was not requested.
    Skipped,
    /// Cleanup was requested but the destination did not exist.
    NotPresent,
    /// The destination is outside the allowed root; nothing was touched.
    Refused(Error),
}

/// Returns `true` when `child` is `parent` itself or lies anywhere below it.
///
/// Both paths are made absolute and lexically normalised (`.`/`..` removed)
/// before comparing components, so `/out/../etc` is not nested under `/out`
/// and `/out2` is not nested under `/out`.
pub fn is_nested_directory(parent: &Path, child: &Path) -> bool {
    match (parent.absolutize(), child.absolutize()) {
        (Ok(parent), Ok(child)) => child.starts_with(&parent),
        _ => false,
    }
}

/// Recursively deletes `dir`, deepest entries first.
///
/// Read-only attributes are cleared before deletion. A missing directory is
/// not an error. A symlinked `dir` is unlinked; its target is left alone.
pub async fn remove_directory(dir: &Path) -> Result<()> {
    let Ok(metadata) = std::fs::symlink_metadata(dir) else {
        return Ok(());
    };
    if metadata.file_type().is_symlink() {
        log::debug!("{} is a symbolic link, removing the link only", dir.display());
        return remove_link(dir);
    }
    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let dir = dir.to_path_buf();

    tokio::task::spawn_blocking(move || {
        let walker = walkdir::WalkDir::new(&dir)
            .follow_root_links(false)
            .contents_first(true);
        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            clear_readonly(path)?;

            if entry.file_type().is_dir() {
                std::fs::remove_dir(path).fs_context("removing directory", path)?;
            } else {
                std::fs::remove_file(path).fs_context("removing file", path)?;
            }
        }
        Ok(())
    })
    .await
    .map_err(|e| Error::GenericError(format!("Directory removal task panicked: {}", e)))?
}

fn remove_link(link: &Path) -> Result<()> {
    // Windows directory symlinks are removed as directories
    std::fs::remove_file(link)
        .or_else(|_| std::fs::remove_dir(link))
        .fs_context("removing symbolic link", link)
}

fn clear_readonly(path: &Path) -> Result<()> {
    let metadata = std::fs::symlink_metadata(path).fs_context("reading metadata", path)?;
    if metadata.file_type().is_symlink() {
        return Ok(());
    }

    let mut permissions = metadata.permissions();
    if permissions.readonly() {
        #[allow(clippy::permissions_set_readonly_false)]
        permissions.set_readonly(false);
        std::fs::set_permissions(path, permissions).fs_context("clearing read-only flag", path)?;
    }
    Ok(())
}

/// Removes the jpackage destination directory when `enabled` and it is safely
/// nested under `allowed_root`.
///
/// A refusal is reported as [`CleanOutcome::Refused`] rather than an error so
/// that packaging can still go ahead; I/O failures while deleting are errors.
pub async fn clean_destination(
    destination: &Path,
    allowed_root: &Path,
    enabled: bool,
) -> Result<CleanOutcome> {
    if !enabled {
        return Ok(CleanOutcome::Skipped);
    }

    if !is_nested_directory(allowed_root, destination) {
        return Ok(CleanOutcome::Refused(Error::DestinationOutsideAllowedRoot {
            destination: absolute(destination),
            allowed_root: absolute(allowed_root),
        }));
    }

    if !destination.exists() {
        log::debug!("Destination {} does not exist, nothing to remove", destination.display());
        return Ok(CleanOutcome::NotPresent);
    }

    log::info!("Removing destination directory {}", destination.display());
    remove_directory(destination).await?;
    Ok(CleanOutcome::Removed)
}

fn absolute(path: &Path) -> PathBuf {
    path.absolutize()
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| path.to_path_buf())
}
