//! Column model

use crate::validation::input::is_identifier;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column model representing a field in a table
///
/// Columns are produced by schema introspection and never change afterwards.
/// The only flag the selection engine cares about is [`Column::is_fk`]: a table
/// holding a foreign-key column must also declare at least one relation.
///
/// # Example
///
/// ```rust
/// use table_selection::models::Column;
///
/// let column = Column::new("user_id", "int8").foreign_key();
/// assert!(column.is_fk);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Database type as reported by introspection (e.g. "int8", "varchar")
    #[serde(rename = "type")]
    pub data_type: String,
    /// Whether the column allows NULL values (default: true)
    #[serde(default = "default_true")]
    pub nullable: bool,
    /// Whether this column is part of the primary key (default: false)
    #[serde(default)]
    pub is_pk: bool,
    /// Whether this column participates in a foreign key (default: false)
    #[serde(default)]
    pub is_fk: bool,
}

fn default_true() -> bool {
    true
}

/// Column-local validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnValidationError {
    #[error("column name is empty")]
    EmptyName,

    #[error("column name '{0}' contains illegal character(s)")]
    IllegalName(String),

    #[error("column type is empty")]
    EmptyType,
}

impl Column {
    /// Create a nullable, non-key column
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable: true,
            is_pk: false,
            is_fk: false,
        }
    }

    /// Mark the column as (part of) the primary key
    pub fn primary_key(mut self) -> Self {
        self.is_pk = true;
        self.nullable = false;
        self
    }

    /// Mark the column as participating in a foreign key
    pub fn foreign_key(mut self) -> Self {
        self.is_fk = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Check the column on its own, independent of the owning table
    pub fn validate(&self) -> Result<(), ColumnValidationError> {
        if self.name.trim().is_empty() {
            return Err(ColumnValidationError::EmptyName);
        }

        if !is_identifier(&self.name) {
            return Err(ColumnValidationError::IllegalName(self.name.clone()));
        }

        if self.data_type.trim().is_empty() {
            return Err(ColumnValidationError::EmptyType);
        }

        Ok(())
    }
}
