use crate::domain::value_objects::AssetPath;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 追加・変更・削除に分類されたアセットパスの集合
///
/// 3つの集合は呼び出し側の分類によって互いに素であることが前提で、
/// ここでは強制しない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    /// ソースにのみ存在するパス
    #[serde(default)]
    pub added: BTreeSet<AssetPath>,

    /// 両方に存在し内容が異なるパス
    #[serde(default)]
    pub modified: BTreeSet<AssetPath>,

    /// ターゲットにのみ存在するパス
    #[serde(default)]
    pub removed: BTreeSet<AssetPath>,
}

impl ChangeSet {
    /// 空のChangeSetを作成
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_added(mut self, paths: impl IntoIterator<Item = AssetPath>) -> Self {
        self.added.extend(paths);
        self
    }

    pub fn with_modified(mut self, paths: impl IntoIterator<Item = AssetPath>) -> Self {
        self.modified.extend(paths);
        self
    }

    pub fn with_removed(mut self, paths: impl IntoIterator<Item = AssetPath>) -> Self {
        self.removed.extend(paths);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.removed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.added.len() + self.modified.len() + self.removed.len()
    }

    /// 複数の集合に現れるパス（分類の誤りを警告するため）
    pub fn overlapping(&self) -> Vec<AssetPath> {
        let mut overlap: BTreeSet<AssetPath> = BTreeSet::new();
        overlap.extend(self.added.intersection(&self.modified).cloned());
        overlap.extend(self.added.intersection(&self.removed).cloned());
        overlap.extend(self.modified.intersection(&self.removed).cloned());
        overlap.into_iter().collect()
    }
}
