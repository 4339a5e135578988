//! Relation graph diagnostics
//!
//! Cycles between selected tables are legal (self-referencing hierarchies,
//! mutually referencing tables), but renderers that emit tables in dependency
//! order need to know about them.

use crate::models::Table;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Directed graph of relations between the given tables
pub struct RelationGraph {
    graph: DiGraph<String, ()>,
}

impl RelationGraph {
    /// Build the graph; relations to tables outside `tables` are ignored
    pub fn new(tables: &[Table]) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes: HashMap<String, NodeIndex> = HashMap::new();

        for table in tables {
            let name = table.qualified_name();
            nodes
                .entry(name.clone())
                .or_insert_with(|| graph.add_node(name));
        }

        for table in tables {
            let source = nodes[&table.qualified_name()];
            for relation in &table.relations {
                if let Some(&target) = nodes.get(&relation.target()) {
                    graph.update_edge(source, target, ());
                }
            }
        }

        Self { graph }
    }

    /// Groups of tables that reference each other, directly or transitively
    ///
    /// Members of a group are sorted, and so are the groups.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        let mut cycles: Vec<Vec<String>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || self.graph.contains_edge(component[0], component[0])
            })
            .map(|component| {
                let mut names: Vec<String> = component
                    .into_iter()
                    .map(|idx| self.graph[idx].clone())
                    .collect();
                names.sort();
                names
            })
            .collect();
        cycles.sort();
        cycles
    }
}

/// Relation cycles among `tables`, see [`RelationGraph::cycles`]
pub fn find_relation_cycles(tables: &[Table]) -> Vec<Vec<String>> {
    RelationGraph::new(tables).cycles()
}
