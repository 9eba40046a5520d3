//! The six ordered cleaning stages.
//!
//! Each stage takes a table and returns a table. The order is part of the
//! contract: code substitution must run before the pivot (codes are matched
//! against pre-pivot cells), and the pivot must run before label flattening.

use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::{debug, warn};

use statline_model::Metadata;
use statline_model::columns::{
    CODES_SUFFIX, DATE_COLUMN, HOUSEKEEPING_COLUMNS, MEASURE_COLUMN, PERIOD_COLUMN,
    SUMMATION_TOKEN, VALUE_COLUMN,
};

use crate::data_utils::{any_to_f64, any_to_opt_string, any_to_string};
use crate::error::ShapeConflict;
use crate::period::decode_period;

/// Stage 1: remove the `Id` and `ValueAttribute` housekeeping columns.
/// Absent columns are ignored.
pub fn drop_housekeeping(df: DataFrame) -> DataFrame {
    df.drop_many(HOUSEKEEPING_COLUMNS)
}

/// Stage 2: replace dimension codes with their metadata titles.
///
/// Every category ending in `Codes` (except the temporal dimension) targets
/// the column named by stripping the suffix. Replacement is exact-value:
/// a cell equal to a descriptor's identifier becomes the descriptor's
/// label. Cells without a matching descriptor are left as-is, so the stage
/// is idempotent on already-substituted data.
pub fn apply_code_labels(mut df: DataFrame, metadata: &Metadata) -> Result<DataFrame> {
    for (category, items) in metadata {
        let Some(column) = category.strip_suffix(CODES_SUFFIX) else {
            continue;
        };
        if category.contains(PERIOD_COLUMN) {
            // Temporal dimension, converted to dates in the next stage.
            continue;
        }
        let Ok(col) = df.column(column) else {
            continue;
        };
        let Ok(codes) = col.str() else {
            continue;
        };
        let labels: HashMap<&str, String> = items
            .iter()
            .map(|item| (item.identifier.as_str(), item.label()))
            .collect();
        let mut replaced = 0usize;
        let mut values: Vec<Option<String>> = Vec::with_capacity(df.height());
        for opt in codes.into_iter() {
            values.push(opt.map(|code| match labels.get(code) {
                Some(label) => {
                    replaced += 1;
                    label.clone()
                }
                None => code.to_string(),
            }));
        }
        debug!(column, replaced, "applied code labels");
        df.with_column(Column::new(column.into(), values))?;
    }
    Ok(df)
}

/// Stage 3: decode the `Perioden` column into an ISO-8601 `Date` column.
///
/// Codes that fail to decode yield a null date rather than an error, so
/// datasets without a genuine temporal dimension pass through. Without a
/// `Perioden` column the stage is a no-op.
pub fn add_date_column(mut df: DataFrame) -> Result<DataFrame> {
    let Ok(col) = df.column(PERIOD_COLUMN) else {
        return Ok(df);
    };
    let Ok(periods) = col.str() else {
        return Ok(df);
    };
    let mut undecoded = 0usize;
    let mut dates: Vec<Option<String>> = Vec::with_capacity(df.height());
    for opt in periods.into_iter() {
        let date = opt.and_then(decode_period);
        if date.is_none() && opt.is_some_and(|code| !code.trim().is_empty()) {
            undecoded += 1;
        }
        dates.push(date.map(|d| d.to_string()));
    }
    if undecoded > 0 {
        warn!(undecoded, "period codes did not decode to dates");
    }
    df.with_column(Column::new(DATE_COLUMN.into(), dates))?;
    let df = df.drop(PERIOD_COLUMN)?;
    Ok(df)
}

/// Stage 4: pivot from one row per (key, measure) to one row per key.
///
/// Every column except `Measure` and `Value` is an index key. Key order and
/// measure-column order follow first appearance in the input. A duplicate
/// (key, measure) pair is a [`ShapeConflict`]; the pipeline never silently
/// aggregates. Pivoted columns carry a compound `Value::<measure>` label
/// until the flatten stage.
pub fn pivot_measures(df: &DataFrame) -> Result<DataFrame> {
    let height = df.height();
    let index_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .filter(|name| name != MEASURE_COLUMN && name != VALUE_COLUMN)
        .collect();
    let measures = df
        .column(MEASURE_COLUMN)
        .context("pivot requires a Measure column")?;
    let values = df
        .column(VALUE_COLUMN)
        .context("pivot requires a Value column")?;

    let mut index_cells: Vec<Vec<Option<String>>> = Vec::with_capacity(index_names.len());
    for name in &index_names {
        let col = df.column(name)?;
        index_cells.push(
            (0..height)
                .map(|row| any_to_opt_string(col.get(row).unwrap_or(AnyValue::Null)))
                .collect(),
        );
    }

    // First-appearance order for both row keys and measure columns.
    let mut key_slots: HashMap<Vec<Option<String>>, usize> = HashMap::new();
    let mut keys: Vec<Vec<Option<String>>> = Vec::new();
    let mut measure_slots: HashMap<String, usize> = HashMap::new();
    let mut measure_names: Vec<String> = Vec::new();
    let mut row_keys: Vec<usize> = Vec::with_capacity(height);
    let mut row_measures: Vec<usize> = Vec::with_capacity(height);

    for row in 0..height {
        let key: Vec<Option<String>> = index_cells.iter().map(|cells| cells[row].clone()).collect();
        let slot = match key_slots.get(&key) {
            Some(slot) => *slot,
            None => {
                let slot = keys.len();
                key_slots.insert(key.clone(), slot);
                keys.push(key);
                slot
            }
        };
        row_keys.push(slot);

        let measure = any_to_string(measures.get(row).unwrap_or(AnyValue::Null));
        let m = match measure_slots.get(&measure) {
            Some(m) => *m,
            None => {
                let m = measure_names.len();
                measure_slots.insert(measure.clone(), m);
                measure_names.push(measure);
                m
            }
        };
        row_measures.push(m);
    }

    let mut cells: Vec<Vec<Option<f64>>> = vec![vec![None; keys.len()]; measure_names.len()];
    let mut filled: HashSet<(usize, usize)> = HashSet::with_capacity(height);
    for row in 0..height {
        let slot = row_keys[row];
        let m = row_measures[row];
        if !filled.insert((m, slot)) {
            return Err(ShapeConflict::new(&measure_names[m], &index_names, &keys[slot]).into());
        }
        cells[m][slot] = any_to_f64(values.get(row).unwrap_or(AnyValue::Null));
    }
    debug!(
        rows = keys.len(),
        measures = measure_names.len(),
        "pivoted observations"
    );

    let mut columns: Vec<Column> = Vec::with_capacity(index_names.len() + measure_names.len());
    for (pos, name) in index_names.iter().enumerate() {
        let out: Vec<Option<String>> = keys.iter().map(|key| key[pos].clone()).collect();
        columns.push(Column::new(name.as_str().into(), out));
    }
    for (m, name) in measure_names.iter().enumerate() {
        columns.push(Column::new(
            compound_label(name).into(),
            std::mem::take(&mut cells[m]),
        ));
    }
    DataFrame::new(columns).context("assemble pivoted table")
}

/// Compound label carried by pivoted measure columns between the pivot and
/// flatten stages.
pub fn compound_label(measure: &str) -> String {
    format!("{VALUE_COLUMN}::{measure}")
}

/// Stage 5: collapse compound column labels to a single name, preferring
/// the measure name. Index-key columns keep their own name.
pub fn flatten_labels(df: &DataFrame) -> Result<DataFrame> {
    let prefix = format!("{VALUE_COLUMN}::");
    let columns: Vec<Column> = df
        .get_columns()
        .iter()
        .map(|col| match col.name().strip_prefix(&prefix) {
            Some(measure) => col.clone().with_name(measure.into()),
            None => col.clone(),
        })
        .collect();
    DataFrame::new(columns).context("flatten pivoted column labels")
}

/// Stage 6: drop every row where any cell's string form contains the
/// summation token. Aggregate "total" rows must not mix with granular
/// observations. No matches is a no-op.
pub fn drop_summation_rows(df: DataFrame) -> Result<DataFrame> {
    let height = df.height();
    if height == 0 {
        return Ok(df);
    }
    let mut keep = vec![true; height];
    for col in df.get_columns() {
        for (row, keep_row) in keep.iter_mut().enumerate() {
            if !*keep_row {
                continue;
            }
            let text = any_to_string(col.get(row).unwrap_or(AnyValue::Null));
            if text.contains(SUMMATION_TOKEN) {
                *keep_row = false;
            }
        }
    }
    let dropped = keep.iter().filter(|flag| !**flag).count();
    if dropped == 0 {
        return Ok(df);
    }
    debug!(dropped, "removed summation rows");
    let mask = Series::new("keep".into(), keep);
    df.filter(mask.bool()?).context("filter summation rows")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_housekeeping_is_noop_without_the_columns() {
        let df = DataFrame::new(vec![Column::new("Region".into(), vec!["NL", "BE"])]).unwrap();
        let out = drop_housekeeping(df.clone());
        assert_eq!(out, df);
    }

    #[test]
    fn drop_housekeeping_removes_present_columns() {
        let df = DataFrame::new(vec![
            Column::new("Id".into(), vec![1i64, 2]),
            Column::new("ValueAttribute".into(), vec!["None", "None"]),
            Column::new("Region".into(), vec!["NL", "BE"]),
        ])
        .unwrap();
        let out = drop_housekeeping(df);
        let names: Vec<String> = out
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["Region"]);
    }

    #[test]
    fn compound_labels_round_trip_through_flatten() {
        let df = DataFrame::new(vec![
            Column::new("Region".into(), vec!["NL"]),
            Column::new(compound_label("Population").into(), vec![Some(100.0)]),
        ])
        .unwrap();
        let out = flatten_labels(&df).unwrap();
        assert!(out.column("Population").is_ok());
        assert!(out.column("Region").is_ok());
    }
}
