//! Pruning of relations that point outside the selection

use super::set::TableSet;
use crate::models::Table;
use tracing::debug;

/// Keep only relations whose target is in `included`
///
/// Running it twice with the same set changes nothing.
pub fn filter_relations(tables: &mut [Table], included: &TableSet) {
    for table in tables.iter_mut() {
        let before = table.relations.len();
        table
            .relations
            .retain(|relation| included.contains(&relation.target()));

        let dropped = before - table.relations.len();
        if dropped > 0 {
            debug!(
                "Dropped {} relation(s) of {} pointing outside the selection",
                dropped,
                table.qualified_name()
            );
        }
    }
}
