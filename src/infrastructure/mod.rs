/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - SCM operations (staging, repository resolution)
/// - File system operations (asset copies and deletes, tree scans, plan files)
pub mod filesystem;
pub mod scm;

// Re-export commonly used types
pub use filesystem::{PlanStore, TreeScanner};
pub use scm::{RepositoryResolver, ScmError, ScmFactory, Stager};
