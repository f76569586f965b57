use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StagerKindError {
    #[error("Unsupported stager: {0} (expected 'cli' or 'libgit2')")]
    Unsupported(String),
}

/// Backend used to record newly added assets in a repository index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StagerKind {
    /// Run the system `git add`
    Cli,
    /// Write the index directly through libgit2
    Libgit2,
}

impl Default for StagerKind {
    fn default() -> Self {
        Self::Cli
    }
}

impl fmt::Display for StagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StagerKind::Cli => write!(f, "cli"),
            StagerKind::Libgit2 => write!(f, "libgit2"),
        }
    }
}

impl FromStr for StagerKind {
    type Err = StagerKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cli" | "git" => Ok(StagerKind::Cli),
            "libgit2" | "git2" => Ok(StagerKind::Libgit2),
            _ => Err(StagerKindError::Unsupported(s.to_string())),
        }
    }
}
