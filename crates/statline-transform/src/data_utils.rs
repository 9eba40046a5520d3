//! Polars `AnyValue` conversion helpers.

use polars::prelude::AnyValue;

/// Converts an `AnyValue` to its string form. Null becomes an empty string;
/// floats are formatted without trailing zeros.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(v) => v.to_string(),
        AnyValue::StringOwned(v) => v.to_string(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::Boolean(v) => v.to_string(),
        other => other.to_string(),
    }
}

/// Like [`any_to_string`] but preserves nulls, so a null cell and an empty
/// string stay distinguishable in pivot keys.
pub fn any_to_opt_string(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        other => Some(any_to_string(other)),
    }
}

/// Formats a float without unnecessary trailing zeros.
pub fn format_numeric(value: f64) -> String {
    let s = format!("{value}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Converts an `AnyValue` to f64, returning None for null or non-numeric
/// values. Numeric strings parse.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(v) => parse_f64(v),
        AnyValue::StringOwned(v) => parse_f64(&v),
        _ => None,
    }
}

fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::AnyValue;

    #[test]
    fn format_numeric_trims_trailing_zeros() {
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(0.25), "0.25");
    }

    #[test]
    fn null_is_distinguishable_from_empty() {
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_opt_string(AnyValue::Null), None);
        assert_eq!(any_to_opt_string(AnyValue::String("")), Some(String::new()));
    }

    #[test]
    fn numeric_strings_parse_as_f64() {
        assert_eq!(any_to_f64(AnyValue::String("1.5")), Some(1.5));
        assert_eq!(any_to_f64(AnyValue::String("abc")), None);
        assert_eq!(any_to_f64(AnyValue::Null), None);
    }
}
