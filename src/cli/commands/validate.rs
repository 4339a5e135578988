//! Validate command implementation

use crate::error::CliError;
use crate::output::format_validation_report;
use std::path::Path;
use table_selection::{CatalogLoader, TableValidator};

/// Handle the validate command
///
/// Checks every catalog table, not only a selection.
pub fn handle_validate(catalog: &Path) -> Result<(), CliError> {
    let catalog = CatalogLoader::load_file(catalog)?;
    let errors = TableValidator::new().validate_all(catalog.tables());

    println!("{}", format_validation_report(catalog.len(), &errors));

    if !errors.is_empty() {
        return Err(CliError::ValidationFailed(errors.len()));
    }
    Ok(())
}
