//! Dataset catalog: listing, lookup, and keyword search.

use anyhow::{Context, Result};
use rapidfuzz::distance::jaro_winkler;
use serde_json::Value;

use statline_model::{DatasetDescriptor, DatasetSummary};

use crate::dataset::Dataset;
use crate::odata::{OdataClient, parse_page};

/// Search returns at most this many hits.
pub const MAX_SEARCH_HITS: usize = 5;

/// Hits scoring below this similarity are discarded.
pub const MIN_SEARCH_SCORE: f64 = 0.6;

/// Display length cap for catalog descriptions.
pub const MAX_DESCRIPTION_LENGTH: usize = 250;

impl OdataClient {
    /// Lists all catalog entries.
    pub fn datasets(&self) -> Result<Vec<DatasetSummary>> {
        let body = self.get_json(&format!("{}/Datasets", self.base_url()))?;
        let page = parse_page(body).context("parse dataset catalog")?;
        page.records
            .into_iter()
            .map(|record| {
                serde_json::from_value(Value::Object(record)).context("decode catalog entry")
            })
            .collect()
    }

    /// Looks up one dataset by identifier and binds it to this client.
    pub fn dataset(&self, identifier: &str) -> Result<Dataset> {
        let body = self.get_json(&format!("{}/datasets/{identifier}", self.base_url()))?;
        let descriptor: DatasetDescriptor = serde_json::from_value(body)
            .with_context(|| format!("decode descriptor for {identifier}"))?;
        Ok(Dataset::new(descriptor, self.clone()))
    }

    /// Keyword search over the full catalog.
    pub fn search(&self, keyword: &str) -> Result<Vec<SearchHit>> {
        let entries = self.datasets()?;
        Ok(search_catalog(entries, keyword))
    }
}

/// One ranked search result.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub summary: DatasetSummary,
    pub score: f64,
}

/// Ranks catalog entries against a keyword by Jaro-Winkler similarity over
/// title and description tokens, best token wins. Title matches dominate;
/// a description match counts at half weight.
pub fn search_catalog(entries: Vec<DatasetSummary>, keyword: &str) -> Vec<SearchHit> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return Vec::new();
    }
    let mut hits: Vec<SearchHit> = entries
        .into_iter()
        .map(|summary| {
            let score = score_entry(&summary, &keyword);
            SearchHit { summary, score }
        })
        .filter(|hit| hit.score >= MIN_SEARCH_SCORE)
        .collect();
    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    hits.truncate(MAX_SEARCH_HITS);
    hits
}

fn score_entry(entry: &DatasetSummary, keyword: &str) -> f64 {
    let title = best_token_similarity(&entry.title, keyword);
    let description = best_token_similarity(&entry.description, keyword);
    f64::max(title, 0.5 * description)
}

fn best_token_similarity(text: &str, keyword: &str) -> f64 {
    text.to_lowercase()
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| jaro_winkler::similarity(token.chars(), keyword.chars()))
        .fold(0.0, f64::max)
}

/// Truncates a description for display, appending an ellipsis when cut.
pub fn short_description(description: &str, limit: usize) -> String {
    if description.chars().count() <= limit {
        description.to_string()
    } else {
        let truncated: String = description.chars().take(limit).collect();
        format!("{truncated}...")
    }
}
