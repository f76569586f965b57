use super::scm_interface::{RepositoryResolver, ScmError};
use crate::domain::value_objects::RepositoryId;
use std::path::{Path, PathBuf};

/// Resolves repositories from an explicit list of roots.
///
/// The deepest root containing the file wins, so a repository nested inside
/// another (e.g. `product/community` inside `product`) owns its own files.
#[derive(Debug, Clone, Default)]
pub struct RepositoryRoots {
    roots: Vec<RepositoryId>,
}

impl RepositoryRoots {
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut roots: Vec<RepositoryId> = roots.into_iter().map(RepositoryId::new).collect();
        roots.sort_by_key(|root| std::cmp::Reverse(root.root().components().count()));
        Self { roots }
    }
}

impl RepositoryResolver for RepositoryRoots {
    fn resolve(&self, file: &Path) -> Result<RepositoryId, ScmError> {
        self.roots
            .iter()
            .find(|root| root.relativize(file).is_ok())
            .cloned()
            .ok_or_else(|| ScmError::repository_not_found(file))
    }
}
