//! Table selection
//!
//! Turns a catalog and a list of inclusion patterns into the tables a
//! generator should emit:
//! - wildcard disclosure of patterns ([`disclose_schemas`])
//! - transitive foreign-key closure ([`follow_fks`])
//! - pruning of relations leaving the selection ([`filter_relations`])
//! - per-table validation ([`crate::validation::TableValidator`])
//!
//! [`Selector`] runs the whole pipeline.

pub mod catalog;
pub mod closure;
pub mod config;
pub mod disclose;
pub mod filter;
pub mod qualified;
pub mod set;

pub use catalog::Catalog;
pub use closure::follow_fks;
pub use config::{InvalidTablePolicy, SelectionConfig, SelectionConfigBuilder};
pub use disclose::disclose_schemas;
pub use filter::filter_relations;
pub use qualified::{PUBLIC_SCHEMA, join, schemas, split};
pub use set::{TableSet, uniq};

use crate::models::Table;
use crate::validation::{TableError, TableValidator, find_relation_cycles};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No inclusion patterns configured
    #[error("no table patterns given")]
    NoPatterns,

    /// A selected table failed validation under [`InvalidTablePolicy::Abort`]
    #[error(transparent)]
    InvalidTable(#[from] TableError),
}

/// Outcome of a selection run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Validated tables with pruned relations, in selection order
    pub tables: Vec<Table>,
    /// Tables left out under [`InvalidTablePolicy::Skip`]
    pub skipped: Vec<TableError>,
    /// Groups of selected tables referencing each other
    pub cycles: Vec<Vec<String>>,
}

impl Selection {
    /// Qualified names of the selected tables
    pub fn table_names(&self) -> Vec<String> {
        self.tables.iter().map(Table::qualified_name).collect()
    }
}

/// Runs disclosure, closure, pruning and validation over a catalog
#[derive(Debug, Clone, Default)]
pub struct Selector {
    config: SelectionConfig,
    validator: TableValidator,
}

impl Selector {
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            config,
            validator: TableValidator::new(),
        }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Names of the tables to generate, before pruning and validation
    pub fn resolve(&self, catalog: &Catalog) -> TableSet {
        let disclosed = disclose_schemas(catalog, &self.config.patterns);
        if self.config.follow_fks {
            follow_fks(catalog, disclosed)
        } else {
            disclosed
        }
    }

    /// Select, prune and validate tables from the catalog
    pub fn select(&self, catalog: &Catalog) -> Result<Selection, SelectionError> {
        if self.config.patterns.is_empty() {
            return Err(SelectionError::NoPatterns);
        }

        let included = self.resolve(catalog);
        let mut tables: Vec<Table> = included
            .iter()
            .filter_map(|name| catalog.get(name))
            .cloned()
            .collect();

        filter_relations(&mut tables, &included);

        let mut selection = Selection::default();
        for table in tables {
            match self.validator.check(&table) {
                Ok(()) => selection.tables.push(table),
                Err(err) => match self.config.invalid_tables {
                    InvalidTablePolicy::Abort => return Err(err.into()),
                    InvalidTablePolicy::Skip => {
                        warn!("Skipping {}", err);
                        selection.skipped.push(err);
                    }
                },
            }
        }

        selection.cycles = find_relation_cycles(&selection.tables);

        info!(
            "Selected {} table(s) from {} pattern(s), {} skipped",
            selection.tables.len(),
            self.config.patterns.len(),
            selection.skipped.len()
        );
        Ok(selection)
    }
}
