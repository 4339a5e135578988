//! Relation model

use crate::selection::qualified::join;
use serde::{Deserialize, Serialize};

/// Foreign-key reference from the owning table to `target_schema.target_table`
///
/// A table may hold several relations (one per foreign key, composite keys
/// listing several columns). The target is not required to exist in the
/// catalog; relations pointing outside the selected set are pruned by
/// [`crate::selection::filter_relations`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Relation {
    /// Columns of the owning table forming the foreign key
    #[serde(default)]
    pub source_columns: Vec<String>,
    pub target_schema: String,
    pub target_table: String,
    /// Referenced columns of the target table
    #[serde(default)]
    pub target_columns: Vec<String>,
}

impl Relation {
    pub fn new(target_schema: impl Into<String>, target_table: impl Into<String>) -> Self {
        Self {
            source_columns: Vec::new(),
            target_schema: target_schema.into(),
            target_table: target_table.into(),
            target_columns: Vec::new(),
        }
    }

    /// Set the column pairs making up the key
    pub fn on<S, T>(mut self, source_columns: S, target_columns: T) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        self.source_columns = source_columns.into_iter().map(Into::into).collect();
        self.target_columns = target_columns.into_iter().map(Into::into).collect();
        self
    }

    /// Qualified name of the referenced table
    pub fn target(&self) -> String {
        join(&self.target_schema, &self.target_table)
    }
}
