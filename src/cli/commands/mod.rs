//! CLI command implementations

pub mod select;
pub mod validate;
