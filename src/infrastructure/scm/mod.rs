/// SCM (Source Control Management) collaborators
///
/// Staging of newly added files and resolution of the repository that owns
/// a file, backed by the system `git` or by libgit2.
pub mod git_scm;
pub mod libgit_scm;
pub mod repository_roots;
pub mod scm_factory;
pub mod scm_interface;

pub use git_scm::GitCliStager;
pub use libgit_scm::{GitRepositoryResolver, LibGitStager};
pub use repository_roots::RepositoryRoots;
pub use scm_factory::ScmFactory;
pub use scm_interface::{RepositoryResolver, ScmError, Stager};
