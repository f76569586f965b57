use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryIdError {
    #[error("{file} is not inside repository {root}")]
    NotInRepository { file: String, root: String },
}

/// Identifies a repository by the root of its working tree
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryId(PathBuf);

impl RepositoryId {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self(root.into())
    }

    pub fn root(&self) -> &Path {
        &self.0
    }

    /// Express `file` relative to this repository's root, using `/` separators.
    ///
    /// Falls back to canonical paths when the lexical comparison fails, since
    /// a root discovered through git is usually canonical while callers tend
    /// to pass the path they were configured with.
    pub fn relativize(&self, file: &Path) -> Result<String, RepositoryIdError> {
        if let Some(relative) = lexical_relative(&self.0, file) {
            return Ok(relative);
        }

        let canonical_root = std::fs::canonicalize(&self.0).ok();
        let canonical_file = canonicalize_existing_prefix(file);
        if let (Some(root), Some(file)) = (canonical_root, canonical_file) {
            if let Some(relative) = lexical_relative(&root, &file) {
                return Ok(relative);
            }
        }

        Err(RepositoryIdError::NotInRepository {
            file: file.display().to_string(),
            root: self.0.display().to_string(),
        })
    }
}

fn lexical_relative(root: &Path, file: &Path) -> Option<String> {
    if !file.starts_with(root) || file == root {
        return None;
    }
    let relative = pathdiff::diff_paths(file, root)?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

// The file itself may not exist yet, so canonicalize the deepest existing
// ancestor and re-append the remainder.
fn canonicalize_existing_prefix(file: &Path) -> Option<PathBuf> {
    let mut existing = file;
    let mut rest = Vec::new();
    loop {
        if let Ok(canonical) = std::fs::canonicalize(existing) {
            let mut result = canonical;
            for part in rest.iter().rev() {
                result.push(part);
            }
            return Some(result);
        }
        rest.push(existing.file_name()?.to_os_string());
        existing = existing.parent()?;
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<PathBuf> for RepositoryId {
    fn from(root: PathBuf) -> Self {
        Self(root)
    }
}

impl From<&Path> for RepositoryId {
    fn from(root: &Path) -> Self {
        Self(root.to_path_buf())
    }
}
