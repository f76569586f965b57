use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::AssetPathError;
use crate::infrastructure::scm::ScmError;

/// Which tree a lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeKind {
    Source,
    Target,
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeKind::Source => write!(f, "source"),
            TreeKind::Target => write!(f, "target"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AssetSyncError {
    #[error("{path} has no record in the {tree} tree")]
    MissingRecord { path: String, tree: TreeKind },

    #[error("File system operation failed: {message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Invalid asset path: {0}")]
    InvalidAssetPath(#[from] AssetPathError),

    #[error("SCM operation failed: {0}")]
    Scm(#[from] ScmError),
}

impl AssetSyncError {
    pub fn missing_record(path: impl Into<String>, tree: TreeKind) -> Self {
        Self::MissingRecord {
            path: path.into(),
            tree,
        }
    }

    pub fn filesystem_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }
}

impl From<std::io::Error> for AssetSyncError {
    fn from(error: std::io::Error) -> Self {
        Self::filesystem_error_with_source("File system operation failed", None, error)
    }
}
