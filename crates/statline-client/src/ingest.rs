//! JSON records to DataFrame conversion.
//!
//! The observation schema is discovered, not declared: the column set is
//! the union of keys across all records, in first-appearance order. A
//! column whose non-null values are all JSON numbers becomes `Float64`;
//! everything else becomes a nullable string column.

use std::collections::HashSet;

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame};
use serde_json::{Map, Value};

/// Builds a DataFrame from flat JSON records.
pub fn records_to_frame(records: &[Map<String, Value>]) -> Result<DataFrame> {
    let mut order: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for record in records {
        for key in record.keys() {
            if seen.insert(key.as_str()) {
                order.push(key);
            }
        }
    }

    let mut columns: Vec<Column> = Vec::with_capacity(order.len());
    for name in order {
        if is_numeric_column(records, name) {
            let values: Vec<Option<f64>> = records
                .iter()
                .map(|record| record.get(name).and_then(Value::as_f64))
                .collect();
            columns.push(Column::new(name.into(), values));
        } else {
            let values: Vec<Option<String>> = records
                .iter()
                .map(|record| record.get(name).and_then(cell_to_string))
                .collect();
            columns.push(Column::new(name.into(), values));
        }
    }
    if columns.is_empty() {
        return Ok(DataFrame::default());
    }
    DataFrame::new(columns).context("build table from records")
}

fn is_numeric_column(records: &[Map<String, Value>], name: &str) -> bool {
    let mut any_number = false;
    for record in records {
        match record.get(name) {
            None | Some(Value::Null) => {}
            Some(Value::Number(_)) => any_number = true,
            Some(_) => return false,
        }
    }
    any_number
}

fn cell_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
