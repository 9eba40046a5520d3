//! The dataset entity: identity plus lazy orchestration.

use std::sync::Mutex;

use anyhow::{Result, anyhow};
use polars::prelude::DataFrame;

use statline_model::{DatasetDescriptor, Metadata};
use statline_transform::clean;

use crate::odata::OdataClient;

/// One dataset bound to a client.
///
/// The raw observation table and the metadata mapping are fetched on first
/// access and memoized for the entity's lifetime; the mutex guards the
/// check-then-set so concurrent callers populate each at most once. The
/// cleaned table is recomputed on every access.
#[derive(Debug)]
pub struct Dataset {
    descriptor: DatasetDescriptor,
    client: OdataClient,
    raw: Mutex<Option<DataFrame>>,
    metadata: Mutex<Option<Metadata>>,
}

impl Dataset {
    /// Binds a descriptor (obtained from the catalog lookup) to a client.
    pub fn new(descriptor: DatasetDescriptor, client: OdataClient) -> Self {
        Self {
            descriptor,
            client,
            raw: Mutex::new(None),
            metadata: Mutex::new(None),
        }
    }

    pub fn descriptor(&self) -> &DatasetDescriptor {
        &self.descriptor
    }

    pub fn identifier(&self) -> &str {
        &self.descriptor.identifier
    }

    /// The raw observation table, fetched once and memoized.
    pub fn raw_table(&self) -> Result<DataFrame> {
        let mut cached = self
            .raw
            .lock()
            .map_err(|_| anyhow!("raw table cache poisoned"))?;
        if let Some(df) = cached.as_ref() {
            return Ok(df.clone());
        }
        let url = format!(
            "{}/CBS/{}/Observations",
            self.client.base_url(),
            self.identifier()
        );
        let df = self.client.fetch_table(&url)?;
        *cached = Some(df.clone());
        Ok(df)
    }

    /// The metadata mapping, fetched once and memoized.
    pub fn metadata(&self) -> Result<Metadata> {
        let mut cached = self
            .metadata
            .lock()
            .map_err(|_| anyhow!("metadata cache poisoned"))?;
        if let Some(metadata) = cached.as_ref() {
            return Ok(metadata.clone());
        }
        let metadata = self.client.fetch_metadata(self.identifier())?;
        *cached = Some(metadata.clone());
        Ok(metadata)
    }

    /// The cleaned table, recomputed from the cached raw table and
    /// metadata on every access.
    pub fn cleaned_table(&self) -> Result<DataFrame> {
        let raw = self.raw_table()?;
        let metadata = self.metadata()?;
        clean(&raw, &metadata)
    }
}
