//! Column names and tokens shared across the observation schema.
//!
//! The observation schema is discovered from API responses rather than
//! declared, but a handful of names carry fixed meaning in every dataset.

/// Column holding the name of the measured quantity.
pub const MEASURE_COLUMN: &str = "Measure";

/// Column holding the measured value.
pub const VALUE_COLUMN: &str = "Value";

/// Dimension column with encoded period codes (e.g. `2020KW01`).
pub const PERIOD_COLUMN: &str = "Perioden";

/// Derived ISO-8601 date column produced by temporal conversion.
pub const DATE_COLUMN: &str = "Date";

/// Columns with no analytical meaning, dropped by the first cleaning stage.
pub const HOUSEKEEPING_COLUMNS: [&str; 2] = ["Id", "ValueAttribute"];

/// Suffix marking a metadata category as a dimension's code vocabulary.
pub const CODES_SUFFIX: &str = "Codes";

/// Metadata categories that are not code vocabularies.
pub const RESERVED_CATEGORIES: [&str; 2] = ["Properties", "Observations"];

/// Cell token marking an aggregate ("total") row.
pub const SUMMATION_TOKEN: &str = "Totaal";
