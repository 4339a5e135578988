//! Models module
//!
//! Defines the catalog entities handed over by schema introspection:
//! tables, their columns and their foreign-key relations.

pub mod column;
pub mod naming;
pub mod relation;
pub mod table;

pub use column::{Column, ColumnValidationError};
pub use relation::Relation;
pub use table::Table;
