//! Output formatting for CLI

use crate::error::CliError;
use serde::Serialize;
use table_selection::{Selection, Table, TableError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct SkippedTable<'a> {
    table: &'a str,
    error: String,
}

#[derive(Serialize)]
struct SelectionOutput<'a> {
    tables: &'a [Table],
    skipped: Vec<SkippedTable<'a>>,
    cycles: &'a [Vec<String>],
}

/// Format a selection as a readable listing
pub fn format_selection_text(selection: &Selection) -> String {
    let mut output = String::new();

    output.push_str(&format!("Selected {} table(s):\n", selection.tables.len()));
    for table in &selection.tables {
        output.push_str(&format!(
            "  - {} ({} column(s), {} relation(s))\n",
            table.qualified_name(),
            table.columns.len(),
            table.relations.len()
        ));
        for relation in &table.relations {
            output.push_str(&format!("      -> {}\n", relation.target()));
        }
    }

    if !selection.skipped.is_empty() {
        output.push_str(&format!("\nSkipped {} invalid table(s):\n", selection.skipped.len()));
        for err in &selection.skipped {
            output.push_str(&format!("  - {}: {}\n", err.table, err.source));
        }
    }

    if !selection.cycles.is_empty() {
        output.push_str("\nRelation cycles:\n");
        for cycle in &selection.cycles {
            output.push_str(&format!("  - {}\n", cycle.join(" <-> ")));
        }
    }

    output
}

/// Format a selection as JSON
pub fn format_selection_json(selection: &Selection) -> Result<String, CliError> {
    let output = SelectionOutput {
        tables: &selection.tables,
        skipped: selection
            .skipped
            .iter()
            .map(|err| SkippedTable {
                table: &err.table,
                error: err.source.to_string(),
            })
            .collect(),
        cycles: &selection.cycles,
    };
    serde_json::to_string_pretty(&output).map_err(|e| CliError::OutputError(e.to_string()))
}

/// Format the result of validating a whole catalog
pub fn format_validation_report(checked: usize, errors: &[TableError]) -> String {
    let mut output = String::new();

    for err in errors {
        output.push_str(&format!("  - {}: {}\n", err.table, err.source));
    }

    if errors.is_empty() {
        output.push_str(&format!("All {} table(s) are valid", checked));
    } else {
        output.push_str(&format!(
            "{} of {} table(s) failed validation",
            errors.len(),
            checked
        ));
    }

    output
}
