//! Dataset descriptor as served by the catalog endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptive fields for one dataset, deserialized from
/// `GET {base}/datasets/{identifier}`. The API uses PascalCase keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatasetDescriptor {
    pub identifier: String,
    pub title: String,
    pub description: String,
    pub language: String,
    pub catalog: String,
    pub version: String,
    pub modified: DateTime<Utc>,
    pub release_date: DateTime<Utc>,
    pub modification_date: DateTime<Utc>,
    pub observations_modified: DateTime<Utc>,
    pub observation_count: i64,
    pub dataset_type: String,
}

#[cfg(test)]
mod tests {
    use super::DatasetDescriptor;

    #[test]
    fn deserializes_pascal_case_keys() {
        let raw = serde_json::json!({
            "Identifier": "83583NED",
            "Title": "Bevolking; kerncijfers",
            "Description": "Population key figures",
            "Language": "nl",
            "Catalog": "CBS",
            "Version": "3",
            "Modified": "2023-05-01T09:30:00Z",
            "ReleaseDate": "2023-04-28T06:30:00Z",
            "ModificationDate": "2023-05-01T09:30:00Z",
            "ObservationsModified": "2023-05-01T09:30:00Z",
            "ObservationCount": 12345,
            "DatasetType": "Numeric"
        });
        let descriptor: DatasetDescriptor = serde_json::from_value(raw).unwrap();
        assert_eq!(descriptor.identifier, "83583NED");
        assert_eq!(descriptor.observation_count, 12345);
        assert_eq!(descriptor.dataset_type, "Numeric");
    }
}
