pub mod sync_added;
pub mod sync_assets;
pub mod sync_modified;
pub mod sync_removed;

pub use sync_added::{AdditionOutcome, SyncAddedUseCase};
pub use sync_assets::{SyncAssetsUseCase, SyncReport};
pub use sync_modified::SyncModifiedUseCase;
pub use sync_removed::{RemovalOutcome, SyncRemovedUseCase};
