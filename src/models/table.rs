//! Table model

use super::column::Column;
use super::naming::{camel_cased, has_upper, quoted, singular};
use super::relation::Relation;
use crate::selection::qualified::{PUBLIC_SCHEMA, join};
use serde::{Deserialize, Serialize};

/// Table as produced by schema introspection
///
/// Identity is the `(schema, name)` pair, see [`Table::qualified_name`].
/// The relation list is the only part that changes after construction: it is
/// pruned in place once the selected set is known.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    #[serde(default = "default_schema")]
    pub schema: String,
    pub name: String,
    /// All available columns including pks and fks
    #[serde(default)]
    pub columns: Vec<Column>,
    /// All available relations
    #[serde(default)]
    pub relations: Vec<Relation>,
}

fn default_schema() -> String {
    PUBLIC_SCHEMA.to_string()
}

impl Table {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            columns: Vec::new(),
            relations: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    /// `schema.name`
    pub fn qualified_name(&self) -> String {
        join(&self.schema, &self.name)
    }

    pub fn has_foreign_keys(&self) -> bool {
        self.columns.iter().any(|c| c.is_fk)
    }

    /// Model name in camel case and singular form
    pub fn model_name(&self) -> String {
        camel_cased(&singular(&self.name))
    }

    /// Table name with schema, quoted where needed
    ///
    /// The `public` schema is omitted.
    pub fn table_name(&self) -> String {
        let table = if has_upper(&self.name) {
            quoted(&self.name)
        } else {
            self.name.clone()
        };

        if self.schema == PUBLIC_SCHEMA {
            return table;
        }

        join(&self.schema_name(), &table)
    }

    /// Name of the `get<Table>` view backing the model
    pub fn view_name(&self) -> String {
        let view = quoted(&format!("get{}", camel_cased(&self.name)));

        if self.schema == PUBLIC_SCHEMA {
            return view;
        }

        join(&self.schema_name(), &view)
    }

    fn schema_name(&self) -> String {
        if has_upper(&self.schema) {
            quoted(&self.schema)
        } else {
            self.schema.clone()
        }
    }
}
