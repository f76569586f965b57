use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when an asset path fails validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetPathError {
    #[error("asset path is empty")]
    Empty,

    #[error("asset path must be relative: {0}")]
    Absolute(String),

    #[error("asset path must not leave its tree: {0}")]
    ParentTraversal(String),

    #[error("asset path is not valid UTF-8: {0}")]
    NonUtf8(String),
}

/// Relative path of a tracked asset, shared by the source and target trees.
///
/// Stored with `/` separators and without `.` components so the same asset
/// compares equal regardless of how the caller spelled it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetPath(String);

impl AssetPath {
    pub fn new(path: impl AsRef<str>) -> Result<Self, AssetPathError> {
        let raw = path.as_ref();
        let unified = raw.replace('\\', "/");

        if unified.starts_with('/') || Path::new(raw).is_absolute() {
            return Err(AssetPathError::Absolute(raw.to_string()));
        }

        let mut parts = Vec::new();
        for part in unified.split('/') {
            match part {
                "" | "." => continue,
                ".." => return Err(AssetPathError::ParentTraversal(raw.to_string())),
                other => parts.push(other),
            }
        }

        if parts.is_empty() {
            return Err(AssetPathError::Empty);
        }

        Ok(Self(parts.join("/")))
    }

    /// Build an asset path from a path already relative to a tree root
    pub fn from_relative(path: &Path) -> Result<Self, AssetPathError> {
        let mut parts = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => parts.push(
                    part.to_str()
                        .ok_or_else(|| AssetPathError::NonUtf8(path.display().to_string()))?,
                ),
                Component::CurDir => continue,
                Component::ParentDir => {
                    return Err(AssetPathError::ParentTraversal(path.display().to_string()))
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(AssetPathError::Absolute(path.display().to_string()))
                }
            }
        }

        if parts.is_empty() {
            return Err(AssetPathError::Empty);
        }

        Ok(Self(parts.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The path as a native relative path, suitable for `Path::join`
    pub fn to_native(&self) -> std::path::PathBuf {
        self.0.split('/').collect()
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for AssetPath {
    type Err = AssetPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AssetPath {
    type Error = AssetPathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AssetPath> for String {
    fn from(path: AssetPath) -> Self {
        path.0
    }
}
