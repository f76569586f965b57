/// Domain layer: assets, change sets, repository groups and sync plans
pub mod entities;
pub mod value_objects;
