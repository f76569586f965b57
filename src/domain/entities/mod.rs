pub mod asset;
pub mod change_set;
pub mod repository_group;
pub mod sync_plan;

pub use asset::{AssetLocator, AssetRecord};
pub use change_set::ChangeSet;
pub use repository_group::RepositoryGroup;
pub use sync_plan::{SyncPlan, TreeSpec};
