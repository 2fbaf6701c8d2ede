//! `current` symlink maintenance
//!
//! Each publish directory carries a `current` symlink pointing at the version
//! directory of the latest publish. [`replace_current`] repoints it with
//! create-or-replace semantics: the new link is staged under a unique sibling
//! name and renamed over the existing entry, so readers never observe a
//! missing `current`. [`verify_current`] is the safety net run afterwards:
//! it resolves both sides to canonical form and reports a mismatch (e.g. a
//! concurrent publish won the rename) without retrying or rolling back.

use std::path::{Path, PathBuf};

use crate::error::{PublinkError, PublinkResult};

/// Name of the symlink maintained inside every publish directory
pub const CURRENT_LINK_NAME: &str = "current";

/// Atomically create or replace the `current` symlink in `publish_dir`,
/// pointing at `version_dir`
///
/// The link target is relative (the version directory's file name), so the
/// link survives the publish tree being remounted elsewhere. Returns the
/// path of the link.
pub fn replace_current(publish_dir: &Path, version_dir: &Path) -> PublinkResult<PathBuf> {
    let link_path = publish_dir.join(CURRENT_LINK_NAME);
    let target: PathBuf = match version_dir.file_name() {
        Some(name) => name.into(),
        None => version_dir.to_path_buf(),
    };

    // Stage the symlink under a temporary name, then rename over `current`.
    // rename(2) replaces whatever entry is already there, link or file.
    let staged = tempfile::Builder::new()
        .prefix(".current-")
        .make_in(publish_dir, |path| {
            std::os::unix::fs::symlink(&target, path)
        })?;
    staged
        .into_temp_path()
        .persist(&link_path)
        .map_err(|e| PublinkError::Io(e.error))?;

    Ok(link_path)
}

/// Verify that `current` in `publish_dir` resolves to `version_dir`
///
/// Both paths are canonicalized before comparison. A mismatch comes back as
/// [`PublinkError::LinkTargetMismatch`]; the caller decides how loudly to
/// report it.
pub fn verify_current(publish_dir: &Path, version_dir: &Path) -> PublinkResult<()> {
    let link = publish_dir.join(CURRENT_LINK_NAME);
    let actual = link.canonicalize()?;
    let expected = version_dir.canonicalize()?;

    if actual != expected {
        return Err(PublinkError::LinkTargetMismatch {
            link,
            actual,
            expected,
        });
    }
    Ok(())
}
