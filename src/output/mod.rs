//! Output of the generated table.
//!
//! - [`json`] - JSON serialization to disk
//! - [`terminal`] - Colored diagnostics

mod json;
mod terminal;

pub use json::{to_json_string, write_document};
pub use terminal::coverage_warning;
