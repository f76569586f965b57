use super::change_set::ChangeSet;
use crate::domain::value_objects::StagerKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 同期対象ツリーの定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSpec {
    /// ツリーのルートディレクトリ（アセットパスの基準）
    pub root: PathBuf,

    /// ツリー内のリポジトリのルート。空の場合はgitで探索する
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<PathBuf>,
}

impl TreeSpec {
    /// 新しいTreeSpecを作成
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            repositories: Vec::new(),
        }
    }

    /// リポジトリのルートを設定
    pub fn with_repositories(mut self, repositories: Vec<PathBuf>) -> Self {
        self.repositories = repositories;
        self
    }

    fn resolved_against(&self, base: &Path) -> Self {
        Self {
            root: resolve(base, &self.root),
            repositories: self
                .repositories
                .iter()
                .map(|repo| resolve(base, repo))
                .collect(),
        }
    }
}

/// 同期計画（設定ファイルの内容）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncPlan {
    /// 正とするソースツリー
    pub source: TreeSpec,

    /// 同期されるターゲットツリー
    pub target: TreeSpec,

    /// 追加ファイルのステージング方法
    #[serde(default)]
    pub stager: StagerKind,

    /// 事前に計算された変更の分類
    #[serde(default)]
    pub changes: ChangeSet,
}

impl SyncPlan {
    /// 新しいSyncPlanを作成
    pub fn new(source: TreeSpec, target: TreeSpec) -> Self {
        Self {
            source,
            target,
            stager: StagerKind::default(),
            changes: ChangeSet::default(),
        }
    }

    pub fn with_stager(mut self, stager: StagerKind) -> Self {
        self.stager = stager;
        self
    }

    pub fn with_changes(mut self, changes: ChangeSet) -> Self {
        self.changes = changes;
        self
    }

    /// 相対パスを`base`（通常は計画ファイルのディレクトリ）基準で解決する
    pub fn resolved_against(&self, base: &Path) -> Self {
        Self {
            source: self.source.resolved_against(base),
            target: self.target.resolved_against(base),
            stager: self.stager,
            changes: self.changes.clone(),
        }
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
