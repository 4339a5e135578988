//! Expansion of user patterns into catalog table names

use super::catalog::Catalog;
use super::qualified::{WILDCARD, split};
use super::set::TableSet;
use tracing::debug;

/// Expand `schema.table` and `schema.*` patterns against the catalog
///
/// Patterns naming unknown tables or empty schemas contribute nothing.
/// The result follows pattern order, and catalog order inside a wildcard.
pub fn disclose_schemas<S: AsRef<str>>(catalog: &Catalog, patterns: &[S]) -> TableSet {
    let mut disclosed = TableSet::new();

    for pattern in patterns {
        let (schema, table) = split(pattern.as_ref());
        let before = disclosed.len();

        if table == WILDCARD {
            for t in catalog.tables().iter().filter(|t| t.schema == schema) {
                disclosed.insert(t.qualified_name());
            }
        } else if let Some(t) = catalog
            .tables()
            .iter()
            .find(|t| t.schema == schema && t.name == table)
        {
            disclosed.insert(t.qualified_name());
        }

        if disclosed.len() == before {
            debug!("Pattern {} added no tables", pattern.as_ref());
        }
    }

    debug!("Disclosed {} table(s) from {} pattern(s)", disclosed.len(), patterns.len());
    disclosed
}
