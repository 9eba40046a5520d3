//! Pipeline error types.

use thiserror::Error;

/// Fatal pivot error: two observations share the same index-key and
/// measure combination, so the wide table would have to silently pick or
/// aggregate a value.
#[derive(Debug, Error)]
#[error("duplicate observation for measure `{measure}` at index key [{key}]")]
pub struct ShapeConflict {
    measure: String,
    key: String,
}

impl ShapeConflict {
    pub(crate) fn new(measure: &str, index_names: &[String], key: &[Option<String>]) -> Self {
        let key = index_names
            .iter()
            .zip(key)
            .map(|(name, cell)| format!("{name}={}", cell.as_deref().unwrap_or("null")))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            measure: measure.to_string(),
            key,
        }
    }

    /// Measure name of the colliding observations.
    pub fn measure(&self) -> &str {
        &self.measure
    }

    /// Rendered index-key combination, `name=value` pairs.
    pub fn key(&self) -> &str {
        &self.key
    }
}
