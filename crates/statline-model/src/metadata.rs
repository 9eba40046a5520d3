//! Metadata code vocabularies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from metadata category name to its code descriptors.
///
/// Categories ending in `Codes` describe a dimension's code vocabulary;
/// a category containing `Perioden` is the temporal dimension and is
/// converted to dates rather than substituted.
pub type Metadata = BTreeMap<String, Vec<CodeItem>>;

/// One code descriptor inside a metadata category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodeItem {
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub unit: Option<String>,
}

impl CodeItem {
    /// Human-readable label: the title, with the unit appended in
    /// parentheses when present.
    pub fn label(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} ({unit})", self.title),
            None => self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CodeItem;

    #[test]
    fn label_appends_unit_when_present() {
        let plain = CodeItem {
            identifier: "NL".to_string(),
            title: "Netherlands".to_string(),
            unit: None,
        };
        assert_eq!(plain.label(), "Netherlands");

        let with_unit = CodeItem {
            identifier: "M003".to_string(),
            title: "Average income".to_string(),
            unit: Some("1 000 euro".to_string()),
        };
        assert_eq!(with_unit.label(), "Average income (1 000 euro)");
    }

    #[test]
    fn unit_is_optional_in_source_json() {
        let raw = serde_json::json!({ "Identifier": "NL", "Title": "Netherlands" });
        let item: CodeItem = serde_json::from_value(raw).unwrap();
        assert!(item.unit.is_none());
    }
}
