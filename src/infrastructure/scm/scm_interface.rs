use crate::domain::value_objects::{RepositoryId, RepositoryIdError};
use std::path::Path;

/// Records newly added files in a repository's version-control index
#[cfg_attr(test, mockall::automock)]
pub trait Stager {
    /// Stage `paths` (relative to the repository root) in `repository`
    fn stage(&self, repository: &RepositoryId, paths: &[String]) -> Result<(), ScmError>;
}

/// Maps a physical file location to the repository that contains it
#[cfg_attr(test, mockall::automock)]
pub trait RepositoryResolver {
    /// Resolve the owning repository of `file`. The file may not exist yet.
    fn resolve(&self, file: &Path) -> Result<RepositoryId, ScmError>;
}

impl<F> RepositoryResolver for F
where
    F: Fn(&Path) -> Result<RepositoryId, ScmError>,
{
    fn resolve(&self, file: &Path) -> Result<RepositoryId, ScmError> {
        self(file)
    }
}

/// Errors that can occur during SCM operations
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    #[error("Repository not found for path: {path}")]
    RepositoryNotFound { path: String },

    #[error("Repository at {path} has no working tree")]
    BareRepository { path: String },

    #[error("Staging failed in {repository}: {message}")]
    StagingFailed { repository: String, message: String },

    #[error("SCM executable not found: {executable}")]
    ExecutableNotFound { executable: String },

    #[error("Command execution failed: {command}, exit code: {exit_code}, stderr: {stderr}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("Path outside repository: {0}")]
    OutsideRepository(#[from] RepositoryIdError),

    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl ScmError {
    /// Create a repository not found error
    pub fn repository_not_found(path: &Path) -> Self {
        Self::RepositoryNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create a staging failed error for a repository
    pub fn staging_failed_in(repository: &RepositoryId, message: impl Into<String>) -> Self {
        Self::StagingFailed {
            repository: repository.to_string(),
            message: message.into(),
        }
    }

    /// Create an executable not found error
    pub fn executable_not_found(executable: impl Into<String>) -> Self {
        Self::ExecutableNotFound {
            executable: executable.into(),
        }
    }

    /// Create a command failed error
    pub fn command_failed(
        command: impl Into<String>,
        exit_code: i32,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }
}
