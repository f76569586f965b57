use crate::application::services::failure_isolation::FailureIsolator;
use crate::domain::entities::{AssetLocator, RepositoryGroup};
use crate::domain::value_objects::AssetPath;
use crate::infrastructure::filesystem::asset_files::copy_asset;
use crate::infrastructure::scm::{RepositoryResolver, ScmError, Stager};
use std::collections::BTreeSet;
use std::path::Path;

/// 追加処理の結果
#[derive(Debug, Clone, Default)]
pub struct AdditionOutcome {
    /// コピーとリポジトリ解決まで完了したパスの数
    pub synced_count: usize,

    /// リポジトリごとにまとめた追加パス
    pub groups: RepositoryGroup,

    /// ステージングに成功したリポジトリの数
    pub staged_repositories: usize,
}

/// 新規アセットをターゲットツリーへコピーし、リポジトリごとにステージングするユースケース
pub struct SyncAddedUseCase<'a> {
    /// 新しいファイルの所属リポジトリを求める
    resolver: &'a dyn RepositoryResolver,

    /// 追加ファイルをインデックスに登録する
    stager: &'a dyn Stager,
}

impl<'a> SyncAddedUseCase<'a> {
    /// 新しいSyncAddedUseCaseインスタンスを作成
    pub fn new(resolver: &'a dyn RepositoryResolver, stager: &'a dyn Stager) -> Self {
        Self { resolver, stager }
    }

    /// 追加処理を実行
    ///
    /// 失敗はパスごと（ステージングはリポジトリごと）に分離され、
    /// 残りの処理は続行される。
    pub fn execute(
        &self,
        added: &BTreeSet<AssetPath>,
        source: &AssetLocator,
        target_dir: &Path,
        isolator: &FailureIsolator<'_>,
    ) -> AdditionOutcome {
        let mut outcome = AdditionOutcome::default();

        // 1. コピーと所属リポジトリごとのグループ化
        for path in added {
            isolator.call_safely(&format!("add {}", path), || {
                let target = target_dir.join(path.to_native());
                if target.exists() {
                    isolator.warn(&format!("{} already exists in target repo!", path));
                }

                let record = source.require(path)?;
                copy_asset(record.file(), &target)?;

                let repository = self.resolver.resolve(&target)?;
                let relative = repository.relativize(&target).map_err(ScmError::from)?;
                outcome.groups.add(repository, relative);
                outcome.synced_count += 1;
                Ok(())
            });
        }

        // 2. リポジトリごとに1回だけステージング
        for (repository, paths) in outcome.groups.iter() {
            let staged = isolator.call_safely(&format!("stage {}", repository), || {
                self.stager.stage(repository, paths)?;
                Ok(())
            });
            if staged {
                tracing::info!(repository = %repository, count = paths.len(), "staged new assets");
                outcome.staged_repositories += 1;
            }
        }

        outcome
    }
}
