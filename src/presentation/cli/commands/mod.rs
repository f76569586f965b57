pub mod show_plan;
pub mod sync;

pub use show_plan::*;
pub use sync::*;
