//! Cleaning pipeline for CBS StatLine observation tables.
//!
//! Converts the long "observations + codes" representation served by the
//! open-data API into a wide, human-readable table: housekeeping columns are
//! dropped, dimension codes are replaced by their metadata titles, period
//! codes become dates, and one column per measure is produced by pivoting.

pub mod data_utils;
pub mod error;
pub mod period;
pub mod pipeline;
pub mod stages;

pub use error::ShapeConflict;
pub use period::decode_period;
pub use pipeline::clean;
