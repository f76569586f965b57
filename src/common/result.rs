use std::path::PathBuf;

use crate::common::error::{AssetSyncError, TreeKind};

/// Result alias used across the crate
pub type AssetSyncResult<T> = Result<T, AssetSyncError>;

/// Conversions from `Option` lookups into named errors
pub trait OptionExt<T> {
    /// Turn a missed locator lookup into a [`AssetSyncError::MissingRecord`]
    ///
    /// ```
    /// use assetsync::common::error::TreeKind;
    /// use assetsync::common::result::OptionExt;
    ///
    /// let lookup: Option<u32> = None;
    /// assert!(lookup.ok_or_missing_record("icons/a.svg", TreeKind::Target).is_err());
    /// ```
    fn ok_or_missing_record(self, path: &str, tree: TreeKind) -> AssetSyncResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_missing_record(self, path: &str, tree: TreeKind) -> AssetSyncResult<T> {
        self.ok_or_else(|| AssetSyncError::missing_record(path, tree))
    }
}

/// Attach filesystem context to `std::io` results
pub trait ResultExt<T> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> AssetSyncResult<T>;
}

impl<T> ResultExt<T> for Result<T, std::io::Error> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> AssetSyncResult<T> {
        self.map_err(|e| AssetSyncError::filesystem_error_with_source(message, Some(path.into()), e))
    }
}
