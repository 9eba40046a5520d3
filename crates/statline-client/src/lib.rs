//! Blocking client for the CBS Open Data v4 (StatLine) API.
//!
//! Exposes the paged observation fetcher, the metadata store, the dataset
//! catalog with fuzzy keyword search, and the lazily-memoized [`Dataset`]
//! entity that ties them to the cleaning pipeline.

pub mod catalog;
pub mod dataset;
pub mod ingest;
pub mod metadata;
pub mod odata;

pub use catalog::{SearchHit, search_catalog, short_description};
pub use dataset::Dataset;
pub use ingest::records_to_frame;
pub use odata::{OdataClient, Page, parse_page};
