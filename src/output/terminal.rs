//! Terminal diagnostics.

use crate::models::VendorFilter;
use colored::Colorize;

/// Warning line for a filter that matched no registry row.
pub fn coverage_warning(filter: &VendorFilter) -> String {
    format!(
        "No match found for '{pattern}' in the registry. Output name: {name}",
        pattern = filter.pattern,
        name = filter.canonical_name.as_str().yellow()
    )
}
