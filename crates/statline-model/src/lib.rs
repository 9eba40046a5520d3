pub mod catalog;
pub mod columns;
pub mod descriptor;
pub mod metadata;

pub use catalog::DatasetSummary;
pub use descriptor::DatasetDescriptor;
pub use metadata::{CodeItem, Metadata};
