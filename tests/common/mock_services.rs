//! Recording fakes for the SCM collaborators

use assetsync::domain::value_objects::RepositoryId;
use assetsync::infrastructure::{ScmError, Stager};
use std::cell::RefCell;
use std::collections::HashSet;

/// Stager that records every call and can be told to fail for some repositories
#[derive(Default)]
pub struct RecordingStager {
    calls: RefCell<Vec<(RepositoryId, Vec<String>)>>,
    failing: HashSet<RepositoryId>,
}

impl RecordingStager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(mut self, repository: RepositoryId) -> Self {
        self.failing.insert(repository);
        self
    }

    pub fn calls(&self) -> Vec<(RepositoryId, Vec<String>)> {
        self.calls.borrow().clone()
    }

    /// Paths staged for `repository`, across all calls
    pub fn staged_for(&self, repository: &RepositoryId) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|(repo, _)| repo == repository)
            .flat_map(|(_, paths)| paths.iter().cloned())
            .collect()
    }
}

impl Stager for RecordingStager {
    fn stage(&self, repository: &RepositoryId, paths: &[String]) -> Result<(), ScmError> {
        self.calls
            .borrow_mut()
            .push((repository.clone(), paths.to_vec()));
        if self.failing.contains(repository) {
            return Err(ScmError::staging_failed_in(repository, "simulated staging failure"));
        }
        Ok(())
    }
}
