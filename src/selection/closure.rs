//! Foreign-key closure over the catalog

use super::catalog::Catalog;
use super::set::TableSet;
use std::collections::VecDeque;
use tracing::debug;

/// Grow `disclosed` with every catalog table reachable through relations
///
/// Works off a FIFO queue seeded with the disclosed names. Each admitted
/// table has its relations inspected exactly once; targets missing from the
/// catalog are never admitted. Admissions are bounded by the catalog size,
/// so cycles terminate.
pub fn follow_fks(catalog: &Catalog, disclosed: TableSet) -> TableSet {
    let mut included = disclosed;
    let mut queue: VecDeque<String> = included.iter().map(str::to_string).collect();
    let seeded = included.len();

    while let Some(name) = queue.pop_front() {
        let Some(table) = catalog.get(&name) else {
            continue;
        };

        for relation in &table.relations {
            let target = relation.target();
            if !catalog.contains(&target) {
                debug!("Skipping dangling relation {} -> {}", name, target);
                continue;
            }
            if included.insert(target.clone()) {
                debug!("Following {} -> {}", name, target);
                queue.push_back(target);
            }
        }
    }

    debug!(
        "Foreign keys added {} table(s) to {} disclosed",
        included.len() - seeded,
        seeded
    );
    included
}
