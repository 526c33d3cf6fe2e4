//! Domain models for the OUI table generator.
//!
//! - [`RegistryRow`] - One row of the IEEE registry CSV
//! - [`VendorFilter`] and [`FilterTable`] - Substring patterns and their display names
//! - [`OuiDocument`] - The JSON document written to disk

mod oui_document;
mod registry_row;
mod vendor_filter;

// Re-export public types
pub use oui_document::OuiDocument;
pub use registry_row::RegistryRow;
pub use vendor_filter::{default_filter_table, FilterTable, VendorFilter};
