use crate::common::error::TreeKind;
use crate::common::result::{AssetSyncResult, OptionExt};
use crate::domain::value_objects::{AssetPath, RepositoryId};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// アセットの所在情報（所属リポジトリと物理ファイルの位置）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    /// ファイルを含むリポジトリ
    repository: RepositoryId,

    /// ファイルの物理的な位置
    file: PathBuf,
}

impl AssetRecord {
    /// 新しいAssetRecordを作成
    pub fn new(repository: RepositoryId, file: impl Into<PathBuf>) -> Self {
        Self {
            repository,
            file: file.into(),
        }
    }

    pub fn repository(&self) -> &RepositoryId {
        &self.repository
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

/// アセットパスからAssetRecordへの対応表（ツリーごとに一つ）
#[derive(Debug, Clone)]
pub struct AssetLocator {
    /// どのツリーの対応表か
    tree: TreeKind,

    records: HashMap<AssetPath, AssetRecord>,
}

impl AssetLocator {
    /// 空の対応表を作成
    pub fn new(tree: TreeKind) -> Self {
        Self {
            tree,
            records: HashMap::new(),
        }
    }

    /// レコードを追加してビルダーとして返す
    pub fn with_record(mut self, path: AssetPath, record: AssetRecord) -> Self {
        self.insert(path, record);
        self
    }

    /// レコードを追加（既存のものは置き換える）
    pub fn insert(&mut self, path: AssetPath, record: AssetRecord) -> Option<AssetRecord> {
        self.records.insert(path, record)
    }

    pub fn get(&self, path: &AssetPath) -> Option<&AssetRecord> {
        self.records.get(path)
    }

    /// レコードを取得し、存在しなければMissingRecordエラーを返す
    pub fn require(&self, path: &AssetPath) -> AssetSyncResult<&AssetRecord> {
        self.records
            .get(path)
            .ok_or_missing_record(path.as_str(), self.tree)
    }

    pub fn contains(&self, path: &AssetPath) -> bool {
        self.records.contains_key(path)
    }

    pub fn tree(&self) -> TreeKind {
        self.tree
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
