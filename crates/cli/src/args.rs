//! Command-line arguments.
//!
//! With no subcommand the binary runs the interactive menu. The catalog file
//! and the threshold bound come from the environment (see [`crate::config`]).

use clap::{Parser, Subcommand};

use crate::commands::OutputFormat;

/// Inventory query and reporting tool.
#[derive(Debug, Parser)]
#[command(name = "stockroom")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute; omit it to start the interactive menu.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one JSON-encoded query request, e.g. `{"kind": "low_stock", "threshold": 10}`.
    Query {
        /// Output format.
        #[arg(long, value_enum, default_value = "report")]
        format: OutputFormat,

        /// Shorthand for `--format json`.
        #[arg(long, conflicts_with = "format")]
        json: bool,

        /// The request as a JSON object.
        request: String,
    },
}

impl Commands {
    /// The output format a `query` invocation asked for.
    pub fn output_format(&self) -> OutputFormat {
        match self {
            Commands::Query { json: true, .. } => OutputFormat::Json,
            Commands::Query { format, .. } => *format,
        }
    }
}
