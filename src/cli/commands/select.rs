//! Select command implementation

use crate::error::CliError;
use crate::output::{OutputFormat, format_selection_json, format_selection_text};
use std::path::PathBuf;
use table_selection::{CatalogLoader, InvalidTablePolicy, SelectionConfig, Selector};

/// Arguments for the `select` command
pub struct SelectArgs {
    /// Catalog file (YAML or JSON)
    pub catalog: PathBuf,
    /// Inclusion patterns, appended to the ones from the config file
    pub tables: Vec<String>,
    /// Optional YAML selection config
    pub config: Option<PathBuf>,
    /// Do not add tables referenced through foreign keys
    pub no_follow_fks: bool,
    /// Leave invalid tables out instead of failing
    pub skip_invalid: bool,
    pub format: OutputFormat,
}

fn load_config(args: &SelectArgs) -> Result<SelectionConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| CliError::FileReadError(path.clone(), e.to_string()))?;
            SelectionConfig::from_yaml_str(&content).map_err(|e| {
                CliError::InvalidArgument(format!("Invalid config {}: {}", path.display(), e))
            })?
        }
        None => SelectionConfig::new(),
    };

    config.patterns.extend(args.tables.iter().cloned());
    if args.no_follow_fks {
        config.follow_fks = false;
    }
    if args.skip_invalid {
        config.invalid_tables = InvalidTablePolicy::Skip;
    }

    Ok(config)
}

/// Handle the select command
pub fn handle_select(args: &SelectArgs) -> Result<(), CliError> {
    let config = load_config(args)?;
    let catalog = CatalogLoader::load_file(&args.catalog)?;

    let selection = Selector::new(config).select(&catalog)?;

    let rendered = match args.format {
        OutputFormat::Text => format_selection_text(&selection),
        OutputFormat::Json => format_selection_json(&selection)?,
    };
    println!("{}", rendered);
    Ok(())
}
