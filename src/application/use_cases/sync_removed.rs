use crate::application::services::failure_isolation::FailureIsolator;
use crate::common::error::AssetSyncError;
use crate::domain::entities::AssetLocator;
use crate::domain::value_objects::AssetPath;
use crate::infrastructure::filesystem::asset_files::{absolute_path, delete_asset, prune_if_empty};
use std::collections::BTreeSet;

/// 削除処理の結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalOutcome {
    /// 削除できたファイルの数
    pub removed_count: usize,

    /// 空になって削除した親ディレクトリの数
    pub pruned_directories: usize,
}

/// 不要になったアセットをターゲットツリーから削除するユースケース
///
/// 削除後に親ディレクトリが空になった場合は、その親ディレクトリだけを削除する。
/// さらに上位のディレクトリは対象外。
pub struct SyncRemovedUseCase;

impl SyncRemovedUseCase {
    pub fn new() -> Self {
        Self
    }

    /// 削除処理を実行
    pub fn execute(
        &self,
        removed: &BTreeSet<AssetPath>,
        target: &AssetLocator,
        isolator: &FailureIsolator<'_>,
    ) -> RemovalOutcome {
        let mut outcome = RemovalOutcome::default();

        for path in removed {
            isolator.call_safely(&format!("remove {}", path), || {
                let record = target.require(path)?;
                let file = record.file();

                delete_asset(file).map_err(|e| {
                    AssetSyncError::filesystem_error_with_source(
                        format!("Failed to delete {}", absolute_path(file).display()),
                        Some(file.to_path_buf()),
                        e,
                    )
                })?;
                outcome.removed_count += 1;

                if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
                    if prune_if_empty(parent)? {
                        tracing::debug!(directory = %parent.display(), "pruned empty directory");
                        outcome.pruned_directories += 1;
                    }
                }
                Ok(())
            });
        }

        outcome
    }
}

impl Default for SyncRemovedUseCase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::diagnostics::RecordingSink;
    use crate::common::error::TreeKind;
    use crate::domain::entities::AssetRecord;
    use crate::domain::value_objects::RepositoryId;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn asset(path: &str) -> AssetPath {
        AssetPath::new(path).unwrap()
    }

    fn tracked(root: &Path, rel: &str) -> AssetRecord {
        let file = root.join(rel);
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, rel).unwrap();
        AssetRecord::new(RepositoryId::new(root), file)
    }

    #[test]
    fn test_sole_file_and_its_parent_are_removed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let target = AssetLocator::new(TreeKind::Target)
            .with_record(asset("icons/b.svg"), tracked(root, "icons/b.svg"));

        let sink = RecordingSink::new();
        let isolator = FailureIsolator::new(&sink);
        let removed: BTreeSet<_> = [asset("icons/b.svg")].into_iter().collect();

        let outcome = SyncRemovedUseCase::new().execute(&removed, &target, &isolator);

        assert_eq!(
            outcome,
            RemovalOutcome {
                removed_count: 1,
                pruned_directories: 1,
            }
        );
        assert!(!root.join("icons/b.svg").exists());
        assert!(!root.join("icons").exists());
        assert!(root.exists());
    }

    #[test]
    fn test_non_empty_parent_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let target = AssetLocator::new(TreeKind::Target)
            .with_record(asset("icons/b.svg"), tracked(root, "icons/b.svg"))
            .with_record(asset("icons/c.svg"), tracked(root, "icons/c.svg"));

        let sink = RecordingSink::new();
        let isolator = FailureIsolator::new(&sink);
        let removed: BTreeSet<_> = [asset("icons/b.svg")].into_iter().collect();

        let outcome = SyncRemovedUseCase::new().execute(&removed, &target, &isolator);

        assert_eq!(outcome.pruned_directories, 0);
        assert!(root.join("icons/c.svg").exists());
    }

    #[test]
    fn test_grandparent_is_never_pruned() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let target = AssetLocator::new(TreeKind::Target)
            .with_record(asset("a/b/c.svg"), tracked(root, "a/b/c.svg"));

        let sink = RecordingSink::new();
        let isolator = FailureIsolator::new(&sink);
        let removed: BTreeSet<_> = [asset("a/b/c.svg")].into_iter().collect();

        SyncRemovedUseCase::new().execute(&removed, &target, &isolator);

        assert!(!root.join("a/b").exists());
        assert!(root.join("a").is_dir());
    }

    #[test]
    fn test_failed_delete_names_absolute_path_and_continues() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let gone = tracked(root, "gone.svg");
        fs::remove_file(gone.file()).unwrap();

        let target = AssetLocator::new(TreeKind::Target)
            .with_record(asset("gone.svg"), gone)
            .with_record(asset("keep/x.svg"), tracked(root, "keep/x.svg"));

        let sink = RecordingSink::new();
        let isolator = FailureIsolator::new(&sink);
        let removed: BTreeSet<_> = [asset("gone.svg"), asset("keep/x.svg")]
            .into_iter()
            .collect();

        let outcome = SyncRemovedUseCase::new().execute(&removed, &target, &isolator);

        assert_eq!(outcome.removed_count, 1);
        assert!(!root.join("keep/x.svg").exists());
        let expected = format!("Failed to delete {}", root.join("gone.svg").display());
        assert_eq!(sink.count_containing(&expected), 1);
        assert_eq!(isolator.failure_count(), 1);
    }

    #[test]
    fn test_existing_path_that_cannot_be_deleted_is_isolated() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        // A directory recorded as the asset exists but is not removable as a file
        let stuck = root.join("icons/stuck.svg");
        fs::create_dir_all(&stuck).unwrap();
        fs::write(stuck.join("inner"), "x").unwrap();

        let target = AssetLocator::new(TreeKind::Target)
            .with_record(
                asset("icons/stuck.svg"),
                AssetRecord::new(RepositoryId::new(root), &stuck),
            )
            .with_record(asset("icons/z.svg"), tracked(root, "icons/z.svg"));

        let sink = RecordingSink::new();
        let isolator = FailureIsolator::new(&sink);
        let removed: BTreeSet<_> = [asset("icons/stuck.svg"), asset("icons/z.svg")]
            .into_iter()
            .collect();

        let outcome = SyncRemovedUseCase::new().execute(&removed, &target, &isolator);

        assert_eq!(
            outcome,
            RemovalOutcome {
                removed_count: 1,
                pruned_directories: 0,
            }
        );
        assert!(stuck.join("inner").exists());
        assert!(!root.join("icons/z.svg").exists());
        let expected = format!(
            "remove icons/stuck.svg: File system operation failed: Failed to delete {}",
            stuck.display()
        );
        assert_eq!(sink.count_containing(&expected), 1);
        assert_eq!(isolator.failure_count(), 1);
    }

    #[test]
    fn test_missing_target_record_is_isolated() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let target = AssetLocator::new(TreeKind::Target)
            .with_record(asset("b.svg"), tracked(root, "b.svg"));

        let sink = RecordingSink::new();
        let isolator = FailureIsolator::new(&sink);
        let removed: BTreeSet<_> = [asset("a.svg"), asset("b.svg")].into_iter().collect();

        let outcome = SyncRemovedUseCase::new().execute(&removed, &target, &isolator);

        assert_eq!(outcome.removed_count, 1);
        assert_eq!(
            sink.messages(),
            vec!["remove a.svg: a.svg has no record in the target tree"]
        );
    }
}
