//! Catalog loading functionality
//!
//! Loads the table catalog produced by schema introspection from YAML or JSON.
//! The document holds a single `tables` list:
//!
//! ```yaml
//! tables:
//!   - schema: public
//!     name: orders
//!     columns:
//!       - { name: id, type: int8, is_pk: true }
//!       - { name: user_id, type: int8, is_fk: true }
//!     relations:
//!       - source_columns: [user_id]
//!         target_schema: public
//!         target_table: users
//!         target_columns: [id]
//! ```

use crate::models::Table;
use crate::selection::Catalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// On-disk shape of a catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub tables: Vec<Table>,
}

/// Catalog loader for YAML and JSON documents
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn from_yaml_str(content: &str) -> Result<Catalog, LoadError> {
        let document: CatalogDocument = serde_yaml::from_str(content)?;
        Ok(Catalog::new(document.tables))
    }

    pub fn from_json_str(content: &str) -> Result<Catalog, LoadError> {
        let document: CatalogDocument = serde_json::from_str(content)?;
        Ok(Catalog::new(document.tables))
    }

    /// Load a catalog file, picking the format from its extension
    pub fn load_file(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Catalog, LoadError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        };

        let content =
            std::fs::read_to_string(path).map_err(|e| LoadError::Io(path.to_path_buf(), e))?;
        let catalog = parse(&content)?;

        info!("Loaded {} tables from {}", catalog.len(), path.display());
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    const YAML: &str = r#"
tables:
  - schema: public
    name: orders
    columns:
      - { name: id, type: int8, is_pk: true }
      - { name: user_id, type: int8, is_fk: true }
    relations:
      - source_columns: [user_id]
        target_schema: public
        target_table: users
        target_columns: [id]
  - name: users
    columns:
      - { name: id, type: int8, is_pk: true }
"#;

    #[test]
    fn test_from_yaml_str() {
        let catalog = CatalogLoader::from_yaml_str(YAML).unwrap();
        assert_eq!(catalog.len(), 2);

        let orders = catalog.get("public.orders").unwrap();
        assert_eq!(orders.columns.len(), 2);
        assert!(orders.columns[1].is_fk);
        assert_eq!(orders.relations[0].target(), "public.users");

        // schema defaults to public
        assert!(catalog.contains("public.users"));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{"tables":[{"schema":"geo","name":"cities","columns":[{"name":"id","type":"int4"}]}]}"#;
        let catalog = CatalogLoader::from_json_str(json).unwrap();
        assert!(catalog.contains("geo.cities"));
        assert!(catalog.get("geo.cities").unwrap().relations.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            CatalogLoader::from_json_str("{"),
            Err(LoadError::Json(_))
        ));
        assert!(matches!(
            CatalogLoader::from_yaml_str("tables: [ {name: "),
            Err(LoadError::Yaml(_))
        ));
    }

    #[test]
    fn test_load_file() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();

        let catalog = CatalogLoader::load_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_load_file_unsupported_extension() {
        let file = Builder::new().suffix(".toml").tempfile().unwrap();
        assert!(matches!(
            CatalogLoader::load_file(file.path()),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_file_missing() {
        assert!(matches!(
            CatalogLoader::load_file("/definitely/not/here.json"),
            Err(LoadError::Io(..))
        ));
    }
}
