//! Vendor filter table.
//!
//! Each filter is a literal, case-insensitive substring of the registry's
//! organization name, paired with the name we publish instead.

use regex::{Regex, RegexBuilder};
use std::error::Error;

/// Curated vendors, in match order.
const DEFAULT_FILTERS: &[(&str, &str)] = &[
    ("NETGEAR", "Netgear"),
    ("l-acoustics", "L-Acoustics"),
    ("AudioScience", "AudioScience"),
    ("Texas Instruments", "Texas Instruments"),
    ("d&b audiotechnik GmbH", "d&b Audiotechnik"),
    ("Meyer Sound Laboratories, Inc.", "Meyer Sound"),
    ("Apple, Inc.", "Apple"),
    ("TEKNEMA, INC.", "TEKNEMA"),
    ("Mark of the Unicorn, Inc.", "MOTU"),
    ("LUMINEX Lighting Control Equipment", "Luminex"),
    ("Cisco Systems, Inc", "Cisco"),
    ("AVID TECHNOLOGY, INC.", "Avid"),
    ("Extreme Networks Headquarters", "Extreme Networks"),
    ("Biamp Systems", "Biamp"),
];

/// A substring pattern and its canonical output name.
#[derive(Debug, Clone)]
pub struct VendorFilter {
    pub pattern: String,
    pub canonical_name: String,
    matcher: Regex,
}

impl VendorFilter {
    /// Compile `pattern` as an escaped, case-insensitive regex.
    pub fn new(pattern: &str, canonical_name: &str) -> Result<Self, Box<dyn Error>> {
        let matcher = RegexBuilder::new(&regex::escape(pattern))
            .case_insensitive(true)
            .build()
            .map_err(|e| format!("Invalid vendor filter '{pattern}': {e}"))?;
        Ok(VendorFilter {
            pattern: pattern.to_string(),
            canonical_name: canonical_name.to_string(),
            matcher,
        })
    }

    pub fn matches(&self, organization_name: &str) -> bool {
        self.matcher.is_match(organization_name)
    }
}

/// Ordered list of [`VendorFilter`]s.
#[derive(Debug, Clone, Default)]
pub struct FilterTable {
    filters: Vec<VendorFilter>,
}

impl FilterTable {
    pub fn new(entries: &[(&str, &str)]) -> Result<Self, Box<dyn Error>> {
        let filters = entries
            .iter()
            .map(|(pattern, name)| VendorFilter::new(pattern, name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FilterTable { filters })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VendorFilter> {
        self.filters.iter()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<'a> IntoIterator for &'a FilterTable {
    type Item = &'a VendorFilter;
    type IntoIter = std::slice::Iter<'a, VendorFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

/// The built-in table of known AVB/audio vendors.
pub fn default_filter_table() -> Result<FilterTable, Box<dyn Error>> {
    FilterTable::new(DEFAULT_FILTERS)
}
