//! JSON output.

use crate::models::OuiDocument;
use std::error::Error;
use std::path::Path;

/// Pretty-print `document` with two-space indentation and a trailing newline.
pub fn to_json_string(document: &OuiDocument) -> Result<String, Box<dyn Error>> {
    let mut json = serde_json::to_string_pretty(document)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    json.push('\n');
    Ok(json)
}

/// Write `document` to `path`, replacing any existing file.
pub fn write_document(document: &OuiDocument, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = to_json_string(document)?;
    log::info!(
        "Writing {} entries to {}",
        document.len(),
        path.display()
    );
    std::fs::write(path, json)
        .map_err(|e| format!("Error writing output file {}: {e}", path.display()))?;
    Ok(())
}
