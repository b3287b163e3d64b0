//! Non-interactive commands.

use anyhow::Context;

use stockroom_inventory::{Catalog, QueryRequest};
use stockroom_reports::format_report;

/// Output format for a one-shot query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width text report.
    #[default]
    Report,
    /// The query outcome as JSON.
    Json,
}

/// Run a single JSON-encoded query request and return the text to print.
pub fn run_query(catalog: &Catalog, request_json: &str, format: OutputFormat) -> anyhow::Result<String> {
    let request = QueryRequest::from_json(request_json).context("invalid query request")?;
    let outcome = request
        .execute(catalog)
        .with_context(|| format!("{} query failed", request.kind()))?;

    match format {
        OutputFormat::Report => {
            Ok(format_report(request.kind().as_str(), Some(&outcome))?)
        }
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(&outcome)?;
            text.push('\n');
            Ok(text)
        }
    }
}
