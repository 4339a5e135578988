//! Table validation functionality
//!
//! Checks the structural invariants a table must satisfy before it is handed
//! to a renderer: well-formed names, at least one column, valid columns, and
//! relations backing every foreign-key column.

use super::input::is_identifier;
use crate::models::{ColumnValidationError, Table};
use thiserror::Error;

/// Reason a single table failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableValidationError {
    #[error("schema name is empty")]
    EmptySchema,

    #[error("table name is empty")]
    EmptyName,

    #[error("schema name '{0}' contains illegal character(s)")]
    IllegalSchemaName(String),

    #[error("table name '{0}' contains illegal character(s)")]
    IllegalTableName(String),

    #[error("table has no columns")]
    NoColumns,

    #[error("column '{column}' is not valid: {source}")]
    InvalidColumn {
        column: String,
        #[source]
        source: ColumnValidationError,
    },

    #[error("table has fkey(s) but no relations")]
    ForeignKeysWithoutRelations,
}

/// Validation failure together with the table it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("table '{table}' is not valid: {source}")]
pub struct TableError {
    /// Qualified name of the offending table
    pub table: String,
    #[source]
    pub source: TableValidationError,
}

/// Table validator
#[derive(Debug, Clone, Copy, Default)]
pub struct TableValidator;

impl TableValidator {
    /// Create a new table validator
    pub fn new() -> Self {
        Self
    }

    /// Validate one table, stopping at the first violation
    pub fn validate(&self, table: &Table) -> Result<(), TableValidationError> {
        if table.schema.trim().is_empty() {
            return Err(TableValidationError::EmptySchema);
        }

        if table.name.trim().is_empty() {
            return Err(TableValidationError::EmptyName);
        }

        if !is_identifier(&table.schema) {
            return Err(TableValidationError::IllegalSchemaName(table.schema.clone()));
        }

        if !is_identifier(&table.name) {
            return Err(TableValidationError::IllegalTableName(table.name.clone()));
        }

        if table.columns.is_empty() {
            return Err(TableValidationError::NoColumns);
        }

        for column in &table.columns {
            column
                .validate()
                .map_err(|source| TableValidationError::InvalidColumn {
                    column: column.name.clone(),
                    source,
                })?;

            if column.is_fk && table.relations.is_empty() {
                return Err(TableValidationError::ForeignKeysWithoutRelations);
            }
        }

        Ok(())
    }

    /// Validate a table and attach its qualified name to the failure
    pub fn check(&self, table: &Table) -> Result<(), TableError> {
        self.validate(table).map_err(|source| TableError {
            table: table.qualified_name(),
            source,
        })
    }

    /// Validate every table, collecting one error per invalid table
    pub fn validate_all(&self, tables: &[Table]) -> Vec<TableError> {
        tables
            .iter()
            .filter_map(|table| self.check(table).err())
            .collect()
    }
}
