pub mod asset_files;
pub mod plan_store;
pub mod tree_scanner;

pub use plan_store::{PlanFormat, PlanStore, PlanStoreError};
pub use tree_scanner::TreeScanner;
