//! Identifier character checks.
//!
//! Schema, table and column names end up verbatim in generated code and SQL,
//! so they are restricted to ASCII letters, digits and underscores.

/// Whether `c` may appear in a schema, table or column name
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whether every character of `name` is allowed
///
/// An empty string passes; emptiness is checked separately so callers can
/// report it as its own error.
///
/// # Examples
///
/// ```
/// use table_selection::validation::input::is_identifier;
///
/// assert!(is_identifier("user_orders2"));
/// assert!(!is_identifier("bad-name"));
/// ```
pub fn is_identifier(name: &str) -> bool {
    name.chars().all(is_identifier_char)
}
