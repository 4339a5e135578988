//! Model loading
//!
//! Reads table catalogs handed over by schema introspection.

pub mod loader;

pub use loader::{CatalogDocument, CatalogLoader, LoadError};
