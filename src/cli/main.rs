//! table-select - command line front end for table selection

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use commands::select::{SelectArgs, handle_select};
use commands::validate::handle_validate;
use output::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "table-select", version, about = "Select tables and their foreign-key closure from a catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve patterns into the validated set of tables to generate
    Select {
        /// Catalog file (.yaml, .yml or .json)
        #[arg(short, long)]
        catalog: PathBuf,

        /// Table pattern, `schema.table` or `schema.*` (repeatable)
        #[arg(short, long = "tables")]
        tables: Vec<String>,

        /// YAML selection config
        #[arg(long)]
        config: Option<PathBuf>,

        /// Do not add tables referenced through foreign keys
        #[arg(long)]
        no_follow_fks: bool,

        /// Leave invalid tables out instead of failing
        #[arg(long)]
        skip_invalid: bool,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Validate every table of a catalog
    Validate {
        /// Catalog file (.yaml, .yml or .json)
        #[arg(short, long)]
        catalog: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("table_selection=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Select {
            catalog,
            tables,
            config,
            no_follow_fks,
            skip_invalid,
            format,
        } => handle_select(&SelectArgs {
            catalog,
            tables,
            config,
            no_follow_fks,
            skip_invalid,
            format,
        })?,
        Command::Validate { catalog } => handle_validate(&catalog)?,
    }

    Ok(())
}
