use crate::common::error::AssetSyncError;
use crate::common::result::{AssetSyncResult, ResultExt};
use std::fs;
use std::path::{Path, PathBuf};

/// Copy `source` over `target`, creating missing parent directories.
///
/// Existing content at `target` is replaced. Returns the number of bytes copied.
pub fn copy_asset(source: &Path, target: &Path) -> AssetSyncResult<u64> {
    // fs::copy truncates the target before reading, which would empty a file copied onto itself
    if target.exists() && is_same_file(source, target) {
        return Err(AssetSyncError::filesystem_error(
            format!(
                "Source and target are the same file: {}",
                absolute_path(target).display()
            ),
            Some(target.to_path_buf()),
        ));
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).with_filesystem_error(
            format!("Failed to create directory {}", parent.display()),
            parent,
        )?;
    }

    fs::copy(source, target).with_filesystem_error(
        format!("Failed to copy {} to {}", source.display(), target.display()),
        target,
    )
}

fn is_same_file(source: &Path, target: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(target)) {
        (Ok(source), Ok(target)) => source == target,
        _ => false,
    }
}

/// Delete a single file
pub fn delete_asset(file: &Path) -> std::io::Result<()> {
    fs::remove_file(file)
}

/// Remove `dir` when it has no entries left. Returns whether it was removed.
pub fn prune_if_empty(dir: &Path) -> AssetSyncResult<bool> {
    let mut entries = fs::read_dir(dir)
        .with_filesystem_error(format!("Failed to list {}", dir.display()), dir)?;

    if entries.next().is_some() {
        return Ok(false);
    }

    fs::remove_dir(dir).with_filesystem_error(format!("Failed to remove {}", dir.display()), dir)?;
    Ok(true)
}

/// Absolute form of `path` for diagnostics; falls back to the path as given
pub fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
