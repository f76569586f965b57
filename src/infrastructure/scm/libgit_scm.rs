use super::scm_interface::{RepositoryResolver, ScmError, Stager};
use crate::domain::value_objects::RepositoryId;
use git2::Repository as Git2Repository;
use std::path::Path;

/// Stages files by writing the repository index through libgit2
#[derive(Debug, Default)]
pub struct LibGitStager;

impl LibGitStager {
    pub fn new() -> Self {
        Self
    }
}

impl Stager for LibGitStager {
    fn stage(&self, repository: &RepositoryId, paths: &[String]) -> Result<(), ScmError> {
        if paths.is_empty() {
            return Ok(());
        }

        let repo = Git2Repository::open(repository.root())
            .map_err(|e| ScmError::staging_failed_in(repository, e.message()))?;
        let mut index = repo.index()?;

        for path in paths {
            index
                .add_path(Path::new(path))
                .map_err(|e| ScmError::staging_failed_in(repository, format!("{}: {}", path, e.message())))?;
        }

        index.write()?;
        tracing::debug!(repository = %repository, count = paths.len(), "index updated");
        Ok(())
    }
}

/// Resolves the owning repository by walking up to the nearest `.git`
#[derive(Debug, Default)]
pub struct GitRepositoryResolver;

impl GitRepositoryResolver {
    pub fn new() -> Self {
        Self
    }
}

impl RepositoryResolver for GitRepositoryResolver {
    fn resolve(&self, file: &Path) -> Result<RepositoryId, ScmError> {
        // Newly added files (and sometimes their directories) do not exist yet
        let start = file
            .ancestors()
            .skip(1)
            .find(|dir| dir.is_dir())
            .ok_or_else(|| ScmError::repository_not_found(file))?;

        let repo = Git2Repository::discover(start).map_err(|e| match e.code() {
            git2::ErrorCode::NotFound => ScmError::repository_not_found(file),
            _ => ScmError::Git2(e),
        })?;

        let workdir = repo.workdir().ok_or_else(|| ScmError::BareRepository {
            path: repo.path().display().to_string(),
        })?;

        Ok(RepositoryId::new(strip_trailing_separator(workdir)))
    }
}

// libgit2 reports workdirs with a trailing slash
fn strip_trailing_separator(path: &Path) -> std::path::PathBuf {
    path.components().collect()
}
