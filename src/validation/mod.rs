//! Validation functionality
//!
//! Provides validation logic for:
//! - Table validation (names, columns, foreign-key consistency)
//! - Identifier character checks
//! - Relation graph diagnostics (cycles)

pub mod input;
pub mod relationships;
pub mod tables;

pub use input::{is_identifier, is_identifier_char};
pub use relationships::{RelationGraph, find_relation_cycles};
pub use tables::{TableError, TableValidationError, TableValidator};
