//! IEEE registry row.

use crate::config;
use csv::StringRecord;

/// One row of the registry CSV, reduced to the columns we read.
///
/// The IEEE file carries `Registry,Assignment,Organization Name,Organization Address`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRow {
    /// Registry type, e.g. `MA-L`, `MA-M`, `MA-S`.
    pub registry: String,
    /// Hex prefix as published, e.g. `000393`.
    pub assignment: String,
    /// Raw organization name.
    pub organization_name: String,
}

impl RegistryRow {
    pub fn new(registry: &str, assignment: &str, organization_name: &str) -> Self {
        RegistryRow {
            registry: registry.to_string(),
            assignment: assignment.to_string(),
            organization_name: organization_name.to_string(),
        }
    }

    /// Build from a CSV record, `None` when fewer than three fields are present.
    pub fn from_record(record: &StringRecord) -> Option<Self> {
        match (record.get(0), record.get(1), record.get(2)) {
            (Some(registry), Some(assignment), Some(name)) => {
                Some(RegistryRow::new(registry, assignment, name))
            }
            _ => None,
        }
    }

    pub fn is_ma_l(&self) -> bool {
        self.registry == config::REGISTRY_MA_L
    }

    /// Key used in the output mapping, e.g. `0x000393`.
    pub fn prefix_key(&self) -> String {
        format!("{}{}", config::PREFIX_MARKER, self.assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_four_fields() {
        let record = StringRecord::from(vec!["MA-L", "000393", "Apple, Inc.", "1 Infinite Loop"]);
        let row = RegistryRow::from_record(&record).expect("Row should parse");
        assert_eq!(row, RegistryRow::new("MA-L", "000393", "Apple, Inc."));
        assert!(row.is_ma_l());
        assert_eq!(row.prefix_key(), "0x000393");
    }

    #[test]
    fn test_from_record_too_short() {
        let record = StringRecord::from(vec!["MA-L", "000393"]);
        assert!(RegistryRow::from_record(&record).is_none());
    }

    #[test]
    fn test_header_row_is_not_ma_l() {
        let record =
            StringRecord::from(vec!["Registry", "Assignment", "Organization Name", "Address"]);
        let row = RegistryRow::from_record(&record).expect("Header has enough fields");
        assert!(!row.is_ma_l());
    }

    #[test]
    fn test_registry_type_is_case_sensitive() {
        assert!(!RegistryRow::new("ma-l", "000393", "Apple, Inc.").is_ma_l());
        assert!(!RegistryRow::new("MA-M", "000393", "Apple, Inc.").is_ma_l());
    }
}
