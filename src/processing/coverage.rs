//! Coverage check of the filter table.

use crate::models::{FilterTable, VendorFilter};
use std::collections::BTreeSet;

/// Filters whose canonical name never matched, in table order.
///
/// A non-empty result usually means the registry renamed a vendor.
pub fn unmatched_filters<'a>(
    table: &'a FilterTable,
    matched: &BTreeSet<String>,
) -> Vec<&'a VendorFilter> {
    table
        .iter()
        .filter(|f| !matched.contains(&f.canonical_name))
        .collect()
}
