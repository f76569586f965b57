use crate::domain::value_objects::RepositoryId;
use std::collections::BTreeMap;

/// 追加パスをリポジトリごとにまとめるアキュムレータ
///
/// 追加処理の1パスの中でだけ作られ、最後にリポジトリごとに1回の
/// ステージングで消費される。パスは挿入順を保つ。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryGroup {
    entries: BTreeMap<RepositoryId, Vec<String>>,
}

impl RepositoryGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// リポジトリ相対パスを追加（初回はエントリを作成）
    pub fn add(&mut self, repository: RepositoryId, relative_path: impl Into<String>) {
        self.entries
            .entry(repository)
            .or_default()
            .push(relative_path.into());
    }

    pub fn paths_for(&self, repository: &RepositoryId) -> Option<&[String]> {
        self.entries.get(repository).map(Vec::as_slice)
    }

    /// リポジトリの数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 全リポジトリのパス数の合計
    pub fn path_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RepositoryId, &[String])> {
        self.entries.iter().map(|(repo, paths)| (repo, paths.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_by_repository_preserving_order() {
        let a = RepositoryId::new("/work/a");
        let b = RepositoryId::new("/work/b");

        let mut group = RepositoryGroup::new();
        group.add(a.clone(), "z.svg");
        group.add(b.clone(), "x.svg");
        group.add(a.clone(), "m.svg");

        assert_eq!(group.len(), 2);
        assert_eq!(group.path_count(), 3);
        assert_eq!(group.paths_for(&a).unwrap(), ["z.svg", "m.svg"]);
        assert_eq!(group.paths_for(&b).unwrap(), ["x.svg"]);
    }

    #[test]
    fn test_iter_visits_repositories_in_root_order() {
        let mut group = RepositoryGroup::new();
        group.add(RepositoryId::new("/r2"), "b.svg");
        group.add(RepositoryId::new("/r1"), "a.svg");

        let roots: Vec<_> = group.iter().map(|(repo, _)| repo.clone()).collect();
        assert_eq!(roots, vec![RepositoryId::new("/r1"), RepositoryId::new("/r2")]);
    }
}
