use super::scm_interface::{ScmError, Stager};
use crate::domain::value_objects::RepositoryId;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Upper bound on paths passed to a single `git add` so large batches stay
/// under the platform's argument length limit.
const MAX_PATHS_PER_INVOCATION: usize = 500;

/// Stages files by running the system `git` executable
pub struct GitCliStager {
    git_executable: String,
}

impl Default for GitCliStager {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
        }
    }
}

impl GitCliStager {
    /// Create a new stager using `git` from `PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new stager with a custom executable path
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            git_executable: executable.into(),
        }
    }

    /// Check if git executable is available
    pub fn check_availability(&self) -> Result<(), ScmError> {
        let output = self.execute_git_command(&["--version"], None)?;

        if !output.status.success() {
            return Err(ScmError::executable_not_found(&self.git_executable));
        }

        Ok(())
    }

    /// Execute a git command in the given directory
    fn execute_git_command(
        &self,
        args: &[&str],
        working_dir: Option<&Path>,
    ) -> Result<Output, ScmError> {
        let mut cmd = Command::new(&self.git_executable);
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());

        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }

        cmd.output().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ScmError::executable_not_found(&self.git_executable),
            _ => ScmError::from(e),
        })
    }

    /// Execute a git command and check for success
    fn execute_git_command_checked(
        &self,
        args: &[&str],
        working_dir: Option<&Path>,
    ) -> Result<String, ScmError> {
        let output = self.execute_git_command(args, working_dir)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let command = format!("{} {}", self.git_executable, args.join(" "));
            return Err(ScmError::command_failed(
                command,
                output.status.code().unwrap_or(-1),
                stderr.trim(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Stager for GitCliStager {
    fn stage(&self, repository: &RepositoryId, paths: &[String]) -> Result<(), ScmError> {
        for chunk in paths.chunks(MAX_PATHS_PER_INVOCATION) {
            let mut args = vec!["add", "--"];
            args.extend(chunk.iter().map(String::as_str));

            tracing::debug!(
                repository = %repository,
                count = chunk.len(),
                "running git add"
            );
            self.execute_git_command_checked(&args, Some(repository.root()))?;
        }

        Ok(())
    }
}
