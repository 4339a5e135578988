//! CLI error types

use std::path::PathBuf;
use table_selection::{LoadError, SelectionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to load catalog: {0}")]
    CatalogError(#[from] LoadError),

    #[error("Selection failed: {0}")]
    SelectionError(#[from] SelectionError),

    #[error("{0} table(s) failed validation")]
    ValidationFailed(usize),

    #[error("Failed to serialize output: {0}")]
    OutputError(String),
}
