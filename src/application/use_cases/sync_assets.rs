use super::sync_added::SyncAddedUseCase;
use super::sync_modified::SyncModifiedUseCase;
use super::sync_removed::SyncRemovedUseCase;
use crate::application::services::diagnostics::DiagnosticSink;
use crate::application::services::failure_isolation::{Failure, FailureIsolator};
use crate::domain::entities::{AssetLocator, ChangeSet};
use crate::infrastructure::scm::{RepositoryResolver, Stager};
use serde::Serialize;
use std::path::Path;

/// 同期操作の結果
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    /// コピーされた新規アセットの数
    pub added_count: usize,

    /// ステージングに成功したリポジトリの数
    pub staged_repositories: usize,

    /// 上書きされたアセットの数
    pub modified_count: usize,

    /// 削除されたアセットの数
    pub removed_count: usize,

    /// 空になって削除されたディレクトリの数
    pub pruned_directories: usize,

    /// 警告の数（既存ファイルの上書きなど）
    pub warning_count: usize,

    /// 個別に分離された失敗
    pub failures: Vec<Failure>,
}

impl SyncReport {
    /// 失敗が1件もなかったか
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// 追加・変更・削除の3パスを順に実行するユースケース
///
/// どのパスで失敗が起きても残りのアイテムとパスは続行される。
/// 同じターゲットツリーに対して並行に実行してはならない。
pub struct SyncAssetsUseCase<'a> {
    resolver: &'a dyn RepositoryResolver,
    stager: &'a dyn Stager,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> SyncAssetsUseCase<'a> {
    /// 新しいSyncAssetsUseCaseインスタンスを作成
    pub fn new(
        resolver: &'a dyn RepositoryResolver,
        stager: &'a dyn Stager,
        sink: &'a dyn DiagnosticSink,
    ) -> Self {
        Self {
            resolver,
            stager,
            sink,
        }
    }

    /// 同期を実行
    ///
    /// `target_dir` は追加ファイルの配置先となるターゲットツリーのルート。
    pub fn execute(
        &self,
        changes: &ChangeSet,
        source: &AssetLocator,
        target: &AssetLocator,
        target_dir: &Path,
    ) -> SyncReport {
        let isolator = FailureIsolator::new(self.sink);

        for path in changes.overlapping() {
            isolator.warn(&format!("{} is classified in more than one change set", path));
        }

        tracing::info!(count = changes.added.len(), "syncing added assets");
        let added = SyncAddedUseCase::new(self.resolver, self.stager).execute(
            &changes.added,
            source,
            target_dir,
            &isolator,
        );

        tracing::info!(count = changes.modified.len(), "syncing modified assets");
        let modified_count =
            SyncModifiedUseCase::new().execute(&changes.modified, target, source, &isolator);

        tracing::info!(count = changes.removed.len(), "syncing removed assets");
        let removed = SyncRemovedUseCase::new().execute(&changes.removed, target, &isolator);

        let warning_count = isolator.warning_count();
        let report = SyncReport {
            added_count: added.synced_count,
            staged_repositories: added.staged_repositories,
            modified_count,
            removed_count: removed.removed_count,
            pruned_directories: removed.pruned_directories,
            warning_count,
            failures: isolator.into_failures(),
        };

        tracing::info!(
            added = report.added_count,
            modified = report.modified_count,
            removed = report.removed_count,
            failures = report.failures.len(),
            "asset sync finished"
        );
        report
    }
}
