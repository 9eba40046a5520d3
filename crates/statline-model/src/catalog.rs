//! Catalog listing entries.

use serde::{Deserialize, Serialize};

/// One entry from the dataset catalog (`GET {base}/Datasets`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatasetSummary {
    pub identifier: String,
    pub title: String,
    pub description: String,
}
