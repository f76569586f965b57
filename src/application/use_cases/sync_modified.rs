use crate::application::services::failure_isolation::FailureIsolator;
use crate::domain::entities::AssetLocator;
use crate::domain::value_objects::AssetPath;
use crate::infrastructure::filesystem::asset_files::copy_asset;
use std::collections::BTreeSet;

/// 変更されたアセットをソースの内容でその場上書きするユースケース
///
/// ファイルは既に追跡済みのため、ステージングは行わない。
pub struct SyncModifiedUseCase;

impl SyncModifiedUseCase {
    pub fn new() -> Self {
        Self
    }

    /// 上書き処理を実行し、上書きできたパスの数を返す
    ///
    /// 両方のツリーにレコードが必要。どちらかが欠けている場合はそのパスだけ失敗とする。
    pub fn execute(
        &self,
        modified: &BTreeSet<AssetPath>,
        target: &AssetLocator,
        source: &AssetLocator,
        isolator: &FailureIsolator<'_>,
    ) -> usize {
        let mut overwritten = 0;

        for path in modified {
            isolator.call_safely(&format!("modify {}", path), || {
                let target_record = target.require(path)?;
                let source_record = source.require(path)?;

                let bytes = copy_asset(source_record.file(), target_record.file())?;
                tracing::debug!(asset = %path, bytes, "overwrote asset");
                overwritten += 1;
                Ok(())
            });
        }

        overwritten
    }
}

impl Default for SyncModifiedUseCase {
    fn default() -> Self {
        Self::new()
    }
}
