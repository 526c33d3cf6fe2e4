//! Registry CSV acquisition.
//!
//! - [`fetch`] - HTTP download of the IEEE registry
//! - [`file`] - Local file override

mod fetch;
mod file;

use std::error::Error;
use std::path::PathBuf;

pub use fetch::{build_client, fetch_csv, fetch_csv_with};
pub use file::read_csv_file;

/// Where the registry CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvSource {
    Url(String),
    File(PathBuf),
}

impl CsvSource {
    /// Local file when given, otherwise the configured registry URL.
    pub fn from_override(local_csv: Option<PathBuf>) -> Self {
        match local_csv {
            Some(path) => CsvSource::File(path),
            None => CsvSource::Url(crate::config::oui_csv_url()),
        }
    }
}

impl std::fmt::Display for CsvSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CsvSource::Url(url) => write!(f, "{url}"),
            CsvSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read the raw CSV text from `source`.
pub async fn read_csv_text(source: &CsvSource) -> Result<String, Box<dyn Error>> {
    match source {
        CsvSource::Url(url) => fetch_csv(url).await,
        CsvSource::File(path) => Ok(read_csv_file(path)?),
    }
}
