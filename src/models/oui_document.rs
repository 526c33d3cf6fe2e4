//! Output document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `{"oui_24": {"0x<prefix>": "<vendor>", ...}}`
///
/// A `BTreeMap` keeps the serialized key order stable between runs.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct OuiDocument {
    pub oui_24: BTreeMap<String, String>,
}

impl OuiDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the name for `prefix_key`.
    pub fn insert(&mut self, prefix_key: String, canonical_name: &str) -> Option<String> {
        self.oui_24.insert(prefix_key, canonical_name.to_string())
    }

    pub fn get(&self, prefix_key: &str) -> Option<&str> {
        self.oui_24.get(prefix_key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.oui_24.len()
    }

    pub fn is_empty(&self) -> bool {
        self.oui_24.is_empty()
    }
}
