//! Fixed-order composition of the cleaning stages.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::debug;

use statline_model::Metadata;

use crate::stages::{
    add_date_column, apply_code_labels, drop_housekeeping, drop_summation_rows, flatten_labels,
    pivot_measures,
};

/// Runs the full cleaning pipeline over a raw observation table.
///
/// The stage order is part of the contract: substitution sees pre-pivot
/// cells, the pivot sees substituted dimension values and decoded dates,
/// and the flatten stage sees the pivot's compound labels. The only fatal
/// stage is the pivot (duplicate index-key + measure combination).
pub fn clean(raw: &DataFrame, metadata: &Metadata) -> Result<DataFrame> {
    let df = drop_housekeeping(raw.clone());
    let df = apply_code_labels(df, metadata)?;
    let df = add_date_column(df)?;
    let df = pivot_measures(&df)?;
    let df = flatten_labels(&df)?;
    let df = drop_summation_rows(df)?;
    debug!(rows = df.height(), columns = df.width(), "cleaned table");
    Ok(df)
}
