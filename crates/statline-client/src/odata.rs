//! Paged OData fetches.
//!
//! The API serves tables as JSON envelopes with a `value` array of flat
//! records and an optional `@odata.nextLink` pointing at the next page.

use anyhow::{Context, Result, anyhow};
use polars::prelude::DataFrame;
use serde_json::{Map, Value};
use tracing::info;

use crate::ingest::records_to_frame;

/// Default API root.
pub const BASE_URL: &str = "https://beta-odata4.cbs.nl";

const NEXT_LINK_FIELD: &str = "@odata.nextLink";

/// Blocking HTTP client bound to one API root.
#[derive(Debug, Clone)]
pub struct OdataClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl OdataClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    /// Client against a non-default root, e.g. a local fixture server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .context("build http client")?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn get_json(&self, url: &str) -> Result<Value> {
        let response = self
            .http
            .get(url)
            .send()
            .with_context(|| format!("request {url}"))?
            .error_for_status()
            .with_context(|| format!("request {url}"))?;
        response
            .json()
            .with_context(|| format!("decode response from {url}"))
    }

    /// Fetches a complete table, following the next link until exhausted,
    /// and materializes the concatenated records as a DataFrame.
    pub fn fetch_table(&self, url: &str) -> Result<DataFrame> {
        let mut records: Vec<Map<String, Value>> = Vec::new();
        let mut next = Some(url.to_string());
        let mut pages = 0usize;
        while let Some(page_url) = next {
            let body = self.get_json(&page_url)?;
            let page = parse_page(body).with_context(|| format!("parse page {page_url}"))?;
            pages += 1;
            records.extend(page.records);
            next = page.next_link;
        }
        info!(url, pages, records = records.len(), "fetched paged table");
        records_to_frame(&records)
    }
}

/// One decoded page of an OData envelope.
#[derive(Debug)]
pub struct Page {
    pub records: Vec<Map<String, Value>>,
    pub next_link: Option<String>,
}

/// Decodes an envelope into its records and optional next link.
pub fn parse_page(body: Value) -> Result<Page> {
    let Value::Object(mut envelope) = body else {
        return Err(anyhow!("expected a JSON object envelope"));
    };
    let next_link = envelope
        .get(NEXT_LINK_FIELD)
        .and_then(Value::as_str)
        .map(str::to_string);
    let Some(Value::Array(items)) = envelope.remove("value") else {
        return Err(anyhow!("envelope has no `value` array"));
    };
    let mut records = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Object(record) => records.push(record),
            other => return Err(anyhow!("expected a record object, got {other}")),
        }
    }
    Ok(Page { records, next_link })
}
