use super::git_scm::GitCliStager;
use super::libgit_scm::{GitRepositoryResolver, LibGitStager};
use super::repository_roots::RepositoryRoots;
use super::scm_interface::{RepositoryResolver, Stager};
use crate::domain::entities::TreeSpec;
use crate::domain::value_objects::StagerKind;

/// Factory for the SCM collaborators a sync run needs
pub struct ScmFactory;

impl ScmFactory {
    /// Create the stager for the given backend
    pub fn create_stager(kind: StagerKind) -> Box<dyn Stager> {
        match kind {
            StagerKind::Cli => Box::new(GitCliStager::new()),
            StagerKind::Libgit2 => Box::new(LibGitStager::new()),
        }
    }

    /// Create a resolver for a tree: explicit roots when configured,
    /// git discovery otherwise
    pub fn create_resolver(tree: &TreeSpec) -> Box<dyn RepositoryResolver> {
        if tree.repositories.is_empty() {
            Box::new(GitRepositoryResolver::new())
        } else {
            Box::new(RepositoryRoots::new(tree.repositories.iter().cloned()))
        }
    }
}
