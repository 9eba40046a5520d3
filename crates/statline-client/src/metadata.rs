//! Metadata store: code vocabularies per dataset dimension.

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use statline_model::columns::RESERVED_CATEGORIES;
use statline_model::{CodeItem, Metadata};

use crate::odata::{OdataClient, parse_page};

impl OdataClient {
    /// Fetches the metadata mapping for a dataset: the dataset root lists
    /// the categories, and each non-reserved category is fetched with one
    /// request and decoded into code descriptors.
    pub fn fetch_metadata(&self, identifier: &str) -> Result<Metadata> {
        let root = format!("{}/CBS/{identifier}", self.base_url());
        let body = self
            .get_json(&root)
            .with_context(|| format!("list metadata categories for {identifier}"))?;
        let mut metadata = Metadata::new();
        for name in category_names(&body) {
            let body = self.get_json(&format!("{root}/{name}"))?;
            let page =
                parse_page(body).with_context(|| format!("parse metadata category {name}"))?;
            let items = page
                .records
                .into_iter()
                .map(|record| serde_json::from_value(Value::Object(record)))
                .collect::<Result<Vec<CodeItem>, _>>()
                .with_context(|| format!("decode code descriptors for {name}"))?;
            debug!(category = %name, codes = items.len(), "fetched metadata category");
            metadata.insert(name, items);
        }
        Ok(metadata)
    }
}

/// Category names under a dataset root, excluding the reserved
/// `Properties` and `Observations` entries.
pub fn category_names(body: &Value) -> Vec<String> {
    body.get("value")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| item.get("name").and_then(Value::as_str))
        .filter(|name| !RESERVED_CATEGORIES.contains(name))
        .map(str::to_string)
        .collect()
}
