//! Build a small MAC-prefix to vendor lookup table from the IEEE MA-L registry.
//!
//! The registry CSV is downloaded (or read from a local copy), reduced to a
//! curated list of vendors, renamed and written as `{"oui_24": {...}}`.

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod source;

use models::FilterTable;
use output::{coverage_warning, write_document};
use processing::{filter_rows, parse_registry_rows, unmatched_filters, FilterOutcome};
use source::{read_csv_text, CsvSource};
use std::error::Error;
use std::path::Path;

/// Parse registry text and apply `table`.
pub fn build_document(text: &str, table: &FilterTable) -> Result<FilterOutcome, Box<dyn Error>> {
    let rows = parse_registry_rows(text)?;
    Ok(filter_rows(&rows, table))
}

/// Run the whole pipeline: acquire, filter, warn about unused filters, write.
pub async fn generate_oui(
    source: &CsvSource,
    output_file: &Path,
    table: &FilterTable,
) -> Result<FilterOutcome, Box<dyn Error>> {
    log::info!("#Start generate_oui() source={source}");

    let text = read_csv_text(source).await?;
    let outcome = build_document(&text, table)?;

    for filter in unmatched_filters(table, &outcome.matched) {
        log::warn!("{}", coverage_warning(filter));
    }

    write_document(&outcome.document, output_file)?;
    Ok(outcome)
}
