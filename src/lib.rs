//! Table Selection - catalog selection engine for schema-driven model generators
//!
//! Provides:
//! - Qualified name parsing and joining
//! - Wildcard disclosure of inclusion patterns
//! - Transitive foreign-key closure and relation pruning
//! - Structural table validation
//! - Catalog loading (YAML/JSON)

pub mod model;
pub mod models;
pub mod selection;
pub mod validation;

// Re-export commonly used types
pub use model::{CatalogLoader, LoadError};
pub use models::{Column, ColumnValidationError, Relation, Table};
pub use selection::{
    Catalog, InvalidTablePolicy, Selection, SelectionConfig, SelectionError, Selector, TableSet,
};
pub use validation::{TableError, TableValidationError, TableValidator};
