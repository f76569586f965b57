use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::common::error::{AssetSyncError, TreeKind};
use crate::common::result::AssetSyncResult;
use crate::domain::entities::{AssetLocator, AssetRecord};
use crate::domain::value_objects::{AssetPath, RepositoryId};
use crate::infrastructure::scm::RepositoryResolver;

/// VCS metadata names never treated as assets.
///
/// `.git` is a plain file in submodules and linked worktrees.
const METADATA_NAMES: &[&str] = &[".git", ".svn", ".hg"];

/// Builds an [`AssetLocator`] by walking a tree on disk
pub struct TreeScanner<'a> {
    resolver: &'a dyn RepositoryResolver,
}

impl<'a> TreeScanner<'a> {
    pub fn new(resolver: &'a dyn RepositoryResolver) -> Self {
        Self { resolver }
    }

    /// Scan `root`, keying every regular file by its path relative to `root`.
    ///
    /// Files that belong to no repository are skipped with a warning.
    pub fn scan(&self, root: &Path, tree: TreeKind) -> AssetSyncResult<AssetLocator> {
        if !root.is_dir() {
            return Err(AssetSyncError::filesystem_error(
                format!("{} tree root is not a directory: {}", tree, root.display()),
                Some(root.to_path_buf()),
            ));
        }

        let mut locator = AssetLocator::new(tree);
        // Resolution is per directory, files in one directory share a repository
        let mut owners: HashMap<PathBuf, Option<RepositoryId>> = HashMap::new();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !is_metadata(entry));

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf);
                AssetSyncError::filesystem_error_with_source(
                    format!("Failed to walk {} tree", tree),
                    path,
                    std::io::Error::from(e),
                )
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let file = entry.path();
            let relative = file
                .strip_prefix(root)
                .map_err(|_| AssetSyncError::filesystem_error("Walked outside tree root", Some(file.to_path_buf())))?;
            let asset_path = match AssetPath::from_relative(relative) {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!(file = %file.display(), "skipping asset: {}", e);
                    continue;
                }
            };

            let dir = file.parent().unwrap_or(root).to_path_buf();
            let owner = owners
                .entry(dir)
                .or_insert_with(|| match self.resolver.resolve(file) {
                    Ok(repository) => Some(repository),
                    Err(e) => {
                        tracing::warn!(file = %file.display(), "no owning repository: {}", e);
                        None
                    }
                });

            if let Some(repository) = owner {
                locator.insert(asset_path, AssetRecord::new(repository.clone(), file));
            }
        }

        tracing::debug!(tree = %tree, root = %root.display(), assets = locator.len(), "tree scanned");
        Ok(locator)
    }
}

fn is_metadata(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| METADATA_NAMES.contains(&name))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::scm::RepositoryRoots;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, rel.as_bytes()).unwrap();
    }

    #[test]
    fn test_scan_keys_by_relative_path_and_skips_git() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "icons/a.svg");
        write(root, "community/icons/b.svg");
        write(root, ".git/HEAD");
        write(root, "community/.git/config");

        let resolver = RepositoryRoots::new(vec![root.to_path_buf(), root.join("community")]);
        let locator = TreeScanner::new(&resolver)
            .scan(root, TreeKind::Target)
            .unwrap();

        assert_eq!(locator.len(), 2);

        let a = locator.get(&AssetPath::new("icons/a.svg").unwrap()).unwrap();
        assert_eq!(a.repository().root(), root);
        assert_eq!(a.file(), root.join("icons/a.svg"));

        let b = locator
            .get(&AssetPath::new("community/icons/b.svg").unwrap())
            .unwrap();
        assert_eq!(b.repository().root(), root.join("community"));
    }

    #[test]
    fn test_gitlink_file_is_not_an_asset() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "icons/a.svg");
        fs::create_dir_all(root.join("community/icons")).unwrap();
        fs::write(
            root.join("community/.git"),
            "gitdir: ../.git/modules/community\n",
        )
        .unwrap();
        write(root, "community/icons/b.svg");
        fs::write(root.join(".hg"), "not a directory").unwrap();

        let resolver = RepositoryRoots::new(vec![root.to_path_buf(), root.join("community")]);
        let locator = TreeScanner::new(&resolver)
            .scan(root, TreeKind::Target)
            .unwrap();

        assert_eq!(locator.len(), 2);
        assert!(!locator.contains(&AssetPath::new("community/.git").unwrap()));
        assert!(!locator.contains(&AssetPath::new(".hg").unwrap()));
        assert!(locator.contains(&AssetPath::new("community/icons/b.svg").unwrap()));
    }

    #[test]
    fn test_root_named_like_metadata_is_still_scanned() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join(".svn");
        write(&root, "a.svg");

        let resolver = RepositoryRoots::new(vec![root.clone()]);
        let locator = TreeScanner::new(&resolver)
            .scan(&root, TreeKind::Source)
            .unwrap();

        assert_eq!(locator.len(), 1);
    }

    #[test]
    fn test_files_outside_repositories_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "tracked/a.svg");
        write(root, "loose/b.svg");

        let resolver = RepositoryRoots::new(vec![root.join("tracked")]);
        let locator = TreeScanner::new(&resolver)
            .scan(root, TreeKind::Source)
            .unwrap();

        assert_eq!(locator.len(), 1);
        assert!(locator.contains(&AssetPath::new("tracked/a.svg").unwrap()));
        assert_eq!(locator.tree(), TreeKind::Source);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = RepositoryRoots::default();
        let result = TreeScanner::new(&resolver).scan(&temp_dir.path().join("nope"), TreeKind::Source);
        assert!(matches!(result, Err(AssetSyncError::FileSystemError { .. })));
    }
}
