//! Configuration for table selection

use serde::{Deserialize, Serialize};

/// What to do with a selected table that fails validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvalidTablePolicy {
    /// Stop the whole selection on the first invalid table
    #[default]
    Abort,
    /// Leave the table out and report it alongside the selection
    Skip,
}

/// Configuration for table selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionConfig {
    /// Inclusion patterns, `schema.table` or `schema.*`
    pub patterns: Vec<String>,

    /// Add tables referenced through foreign keys
    pub follow_fks: bool,

    /// Handling of tables failing validation
    pub invalid_tables: InvalidTablePolicy,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            follow_fks: true,
            invalid_tables: InvalidTablePolicy::Abort,
        }
    }
}

impl SelectionConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> SelectionConfigBuilder {
        SelectionConfigBuilder::default()
    }

    /// Parse a configuration from YAML
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

/// Builder for SelectionConfig
#[derive(Debug, Default)]
pub struct SelectionConfigBuilder {
    config: SelectionConfig,
}

impl SelectionConfigBuilder {
    /// Add a single inclusion pattern
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.patterns.push(pattern.into());
        self
    }

    /// Add several inclusion patterns
    pub fn patterns<I>(mut self, patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.config
            .patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Enable or disable following foreign keys
    pub fn follow_fks(mut self, follow: bool) -> Self {
        self.config.follow_fks = follow;
        self
    }

    pub fn invalid_tables(mut self, policy: InvalidTablePolicy) -> Self {
        self.config.invalid_tables = policy;
        self
    }

    /// Build the configuration
    pub fn build(self) -> SelectionConfig {
        self.config
    }
}
