//! Domain layer
pub mod aggregates;
pub mod value_objects;
