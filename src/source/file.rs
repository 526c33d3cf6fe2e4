//! Local registry file.

use std::path::Path;

/// Read a local copy of the registry. I/O errors are returned as-is.
pub fn read_csv_file(path: &Path) -> std::io::Result<String> {
    log::info!("Reading registry CSV from file: {}", path.display());
    let text = std::fs::read_to_string(path)?;
    log::debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
