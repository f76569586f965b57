//! Test fixtures for creating asset trees on disk

use assetsync::common::error::TreeKind;
use assetsync::domain::entities::AssetLocator;
use assetsync::domain::value_objects::AssetPath;
use assetsync::infrastructure::scm::RepositoryRoots;
use assetsync::infrastructure::TreeScanner;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A source tree and a target tree side by side in a temporary directory.
///
/// Each tree is one repository at its root unless extra target repositories
/// are registered with [`AssetTreeFixture::with_target_repository`].
pub struct AssetTreeFixture {
    pub temp_dir: TempDir,
    pub source_root: PathBuf,
    pub target_root: PathBuf,
    target_repositories: Vec<PathBuf>,
}

impl AssetTreeFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let source_root = temp_dir.path().join("source");
        let target_root = temp_dir.path().join("target");
        fs::create_dir_all(&source_root).expect("Failed to create source root");
        fs::create_dir_all(&target_root).expect("Failed to create target root");

        Self {
            target_repositories: vec![target_root.clone()],
            temp_dir,
            source_root,
            target_root,
        }
    }

    /// Register a nested repository inside the target tree
    pub fn with_target_repository(mut self, rel: &str) -> Self {
        let root = self.target_root.join(rel);
        fs::create_dir_all(&root).expect("Failed to create nested repository");
        self.target_repositories.push(root);
        self
    }

    pub fn source_file(&self, rel: &str, content: &str) -> PathBuf {
        write_file(&self.source_root, rel, content)
    }

    pub fn target_file(&self, rel: &str, content: &str) -> PathBuf {
        write_file(&self.target_root, rel, content)
    }

    pub fn target_path(&self, rel: &str) -> PathBuf {
        self.target_root.join(rel)
    }

    pub fn source_resolver(&self) -> RepositoryRoots {
        RepositoryRoots::new(vec![self.source_root.clone()])
    }

    pub fn target_resolver(&self) -> RepositoryRoots {
        RepositoryRoots::new(self.target_repositories.clone())
    }

    pub fn source_locator(&self) -> AssetLocator {
        TreeScanner::new(&self.source_resolver())
            .scan(&self.source_root, TreeKind::Source)
            .expect("Failed to scan source tree")
    }

    pub fn target_locator(&self) -> AssetLocator {
        TreeScanner::new(&self.target_resolver())
            .scan(&self.target_root, TreeKind::Target)
            .expect("Failed to scan target tree")
    }
}

pub fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(&path, content).expect("Failed to write file");
    path
}

pub fn asset(path: &str) -> AssetPath {
    AssetPath::new(path).expect("Invalid asset path")
}

pub fn assets<const N: usize>(paths: [&str; N]) -> Vec<AssetPath> {
    paths.iter().map(|p| asset(p)).collect()
}
