//! Table catalog indexed by qualified name

use crate::models::Table;
use std::collections::HashMap;
use tracing::warn;

/// Every table known to the generator
///
/// Tables keep their introspection order. A second table with an already
/// known qualified name is dropped.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: Vec<Table>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(tables: Vec<Table>) -> Self {
        let mut catalog = Catalog::default();
        for table in tables {
            let key = table.qualified_name();
            if catalog.index.contains_key(&key) {
                warn!("Duplicate table {} in catalog, keeping the first one", key);
                continue;
            }
            catalog.index.insert(key, catalog.tables.len());
            catalog.tables.push(table);
        }
        catalog
    }

    pub fn get(&self, qualified: &str) -> Option<&Table> {
        self.index.get(qualified).map(|&i| &self.tables[i])
    }

    pub fn contains(&self, qualified: &str) -> bool {
        self.index.contains_key(qualified)
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn into_tables(self) -> Vec<Table> {
        self.tables
    }
}

impl From<Vec<Table>> for Catalog {
    fn from(tables: Vec<Table>) -> Self {
        Catalog::new(tables)
    }
}
