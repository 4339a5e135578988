//! Ordered, duplicate-free sets of qualified names

use std::collections::HashSet;
use std::hash::Hash;

/// Insertion-ordered set of qualified table names
///
/// Membership checks are O(1); iteration yields names in the order they were
/// first admitted, which keeps every downstream pass deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSet {
    order: Vec<String>,
    index: HashSet<String>,
}

impl TableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a name; returns `false` if it was already present
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.index.contains(&name) {
            return false;
        }
        self.index.insert(name.clone());
        self.order.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl<S: Into<String>> FromIterator<S> for TableSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TableSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for TableSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl IntoIterator for TableSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

/// Remove later duplicates, keeping first-occurrence order
pub fn uniq<T>(input: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    input
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
