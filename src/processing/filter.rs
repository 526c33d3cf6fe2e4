//! Row filter and rename.

use crate::models::{FilterTable, OuiDocument, RegistryRow};
use std::collections::BTreeSet;
use std::error::Error;

/// Result of running the filter table over the registry.
#[derive(Debug, Default)]
pub struct FilterOutcome {
    pub document: OuiDocument,
    /// Canonical names that matched at least one MA-L row.
    pub matched: BTreeSet<String>,
    /// Rows with at least three fields, header included.
    pub rows_seen: usize,
    pub ma_l_rows: usize,
}

/// Parse registry CSV text into rows.
///
/// The header is not treated specially: its registry column never equals
/// `MA-L`, so it is dropped by [`filter_rows`]. Records with fewer than
/// three fields are skipped.
pub fn parse_registry_rows(text: &str) -> Result<Vec<RegistryRow>, Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| format!("Error parsing registry CSV record {i}: {e}"))?;
        match RegistryRow::from_record(&record) {
            Some(row) => rows.push(row),
            None => log::trace!("skip short record #{i}: {:?}", record),
        }
    }
    log::info!("Parsed {} registry rows", rows.len());
    Ok(rows)
}

/// Keep MA-L rows whose organization matches a filter, renamed to the
/// filter's canonical name.
///
/// Every filter is tried for every row, in table order, so when one name
/// matches several patterns the last one in the table wins.
pub fn filter_rows<'a, I>(rows: I, table: &FilterTable) -> FilterOutcome
where
    I: IntoIterator<Item = &'a RegistryRow>,
{
    let mut outcome = FilterOutcome::default();

    for row in rows {
        outcome.rows_seen += 1;
        if !row.is_ma_l() {
            continue;
        }
        outcome.ma_l_rows += 1;

        for filter in table {
            if filter.matches(&row.organization_name) {
                log::debug!(
                    "{} '{}' -> {}",
                    row.prefix_key(),
                    row.organization_name,
                    filter.canonical_name
                );
                outcome
                    .document
                    .insert(row.prefix_key(), &filter.canonical_name);
                outcome.matched.insert(filter.canonical_name.clone());
            }
        }
    }

    log::info!(
        "Kept {} of {} MA-L rows ({} rows total), {} vendors matched",
        outcome.document.len(),
        outcome.ma_l_rows,
        outcome.rows_seen,
        outcome.matched.len()
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_filter_table;

    fn apple_table() -> FilterTable {
        FilterTable::new(&[("Apple, Inc.", "Apple")]).unwrap()
    }

    #[test]
    fn test_parse_registry_rows_sample() {
        let text = std::fs::read_to_string("src/tests/test_data/oui_test_01.csv").unwrap();
        let rows = parse_registry_rows(&text).expect("Error parsing sample");
        assert_eq!(rows.len(), 12, "Header plus 11 records");
        assert_eq!(rows[0].registry, "Registry");
        assert_eq!(rows[4].assignment, "00146C");
        assert_eq!(rows[4].organization_name, "NETGEAR");
    }

    #[test]
    fn test_parse_skips_short_records() {
        let rows = parse_registry_rows("MA-L,000393\nMA-L,000393,\"Apple, Inc.\"\n")
            .expect("Flexible rows should parse");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].organization_name, "Apple, Inc.");
    }

    #[test]
    fn test_non_ma_l_excluded_and_case_insensitive() {
        let rows = vec![
            RegistryRow::new("MA-M", "F0ACD7A", "Apple, Inc."),
            RegistryRow::new("MA-L", "000393", "APPLE, INC."),
        ];
        let outcome = filter_rows(&rows, &apple_table());
        assert_eq!(outcome.document.len(), 1);
        assert_eq!(outcome.document.get("0x000393"), Some("Apple"));
        assert_eq!(outcome.document.get("0xF0ACD7A"), None);
        assert_eq!(outcome.rows_seen, 2);
        assert_eq!(outcome.ma_l_rows, 1);
        assert!(outcome.matched.contains("Apple"));
    }

    #[test]
    fn test_unmatched_vendor_produces_nothing() {
        let rows = vec![RegistryRow::new("MA-L", "001DC1", "Audinate Pty Limited")];
        let outcome = filter_rows(&rows, &apple_table());
        assert!(outcome.document.is_empty());
        assert!(outcome.matched.is_empty());
        assert_eq!(outcome.ma_l_rows, 1);
    }

    #[test]
    fn test_last_filter_in_table_wins() {
        let table = FilterTable::new(&[("NETGEAR", "Netgear"), ("Apple, Inc.", "Apple")]).unwrap();
        let rows = vec![RegistryRow::new("MA-L", "ABCDEF", "Netgear and Apple, Inc. JV")];
        let outcome = filter_rows(&rows, &table);
        assert_eq!(outcome.document.get("0xABCDEF"), Some("Apple"));
        assert_eq!(outcome.matched.len(), 2, "Both filters count as matched");
    }

    #[test]
    fn test_repeated_prefix_last_row_wins() {
        let table = default_filter_table().unwrap();
        let rows = vec![
            RegistryRow::new("MA-L", "001122", "Cisco Systems, Inc"),
            RegistryRow::new("MA-L", "001122", "Biamp Systems"),
        ];
        let outcome = filter_rows(&rows, &table);
        assert_eq!(outcome.document.len(), 1);
        assert_eq!(outcome.document.get("0x001122"), Some("Biamp"));
    }

    #[test]
    fn test_sample_with_default_table() {
        let text = std::fs::read_to_string("src/tests/test_data/oui_test_01.csv").unwrap();
        let rows = parse_registry_rows(&text).unwrap();
        let outcome = filter_rows(&rows, &default_filter_table().unwrap());

        assert_eq!(outcome.ma_l_rows, 8);
        assert_eq!(outcome.document.len(), 5);
        assert_eq!(outcome.document.get("0x000393"), Some("Apple"));
        assert_eq!(outcome.document.get("0x00000C"), Some("Cisco"));
        assert_eq!(outcome.document.get("0x0090F2"), Some("Cisco"));
        assert_eq!(outcome.document.get("0x00146C"), Some("Netgear"));
        assert_eq!(outcome.document.get("0x0001F2"), Some("MOTU"));
        // "Meyer Sound Laboratories Inc." lacks the comma of the filter.
        assert_eq!(outcome.document.get("0x001CAB"), None);
    }
}
