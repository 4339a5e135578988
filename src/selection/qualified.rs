//! Qualified table names (`schema.table`)

use super::set::TableSet;

/// Schema assumed for bare table names
pub const PUBLIC_SCHEMA: &str = "public";

/// Table part of a pattern matching every table of a schema
pub const WILDCARD: &str = "*";

/// Split `schema.table` into its parts
///
/// A bare name resolves to the `public` schema. Only the first two
/// dot-separated segments are used, so `a.b.c` yields `("a", "b")`.
///
/// ```
/// use table_selection::selection::qualified::split;
///
/// assert_eq!(split("public.users"), ("public", "users"));
/// assert_eq!(split("users"), ("public", "users"));
/// ```
pub fn split(input: &str) -> (&str, &str) {
    let mut parts = input.split('.');
    match (parts.next(), parts.next()) {
        (Some(schema), Some(table)) => (schema, table),
        _ => (PUBLIC_SCHEMA, input),
    }
}

pub fn join(schema: &str, table: &str) -> String {
    format!("{}.{}", schema, table)
}

/// Distinct schemas of the given qualified names, in first-seen order
pub fn schemas<I, S>(tables: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = TableSet::new();
    for table in tables {
        let (schema, _) = split(table.as_ref());
        seen.insert(schema);
    }
    seen.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!(split("public.users"), ("public", "users"));
        assert_eq!(split("users"), ("public", "users"));
        assert_eq!(split("geo.*"), ("geo", "*"));
        assert_eq!(split("a."), ("a", ""));
    }

    #[test]
    fn test_split_ignores_extra_segments() {
        assert_eq!(split("a.b.c"), ("a", "b"));
    }

    #[test]
    fn test_join() {
        assert_eq!(join("a", "t"), "a.t");
        let (schema, table) = split("billing.invoices");
        assert_eq!(join(schema, table), "billing.invoices");
    }

    #[test]
    fn test_schemas() {
        let names = ["public.users", "geo.cities", "orders", "geo.regions"];
        assert_eq!(schemas(names), vec!["public", "geo"]);
        assert!(schemas(Vec::<String>::new()).is_empty());
    }
}
