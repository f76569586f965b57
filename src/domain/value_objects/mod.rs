pub mod asset_path;
pub mod repository_id;
pub mod stager_kind;

pub use asset_path::{AssetPath, AssetPathError};
pub use repository_id::{RepositoryId, RepositoryIdError};
pub use stager_kind::{StagerKind, StagerKindError};
