//! Period-code decoding.
//!
//! CBS encodes the temporal dimension as `YYYY` + a two-letter frequency
//! marker + a two-digit count, e.g. `2020KW01` for the first quarter of
//! 2020. Each code resolves to the first calendar day of the period.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static PERIOD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})([A-Z]{2})(\d{2})$").expect("period pattern is valid"));

/// Reporting frequency encoded in a period code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Yearly,
    Quarterly,
    Monthly,
}

impl Frequency {
    /// Maps a two-letter marker to its frequency. Unrecognized markers
    /// return None.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "JJ" => Some(Self::Yearly),
            "KW" => Some(Self::Quarterly),
            "MM" => Some(Self::Monthly),
            _ => None,
        }
    }
}

/// Decodes a period code into its calendar anchor date.
///
/// Yearly codes anchor at January 1, monthly codes at the first of the
/// counted month, quarterly codes at the first month of the quarter
/// (`count * 3 - 2`). Codes that do not match the pattern, carry an
/// unrecognized marker, or name an impossible month decode to None.
pub fn decode_period(code: &str) -> Option<NaiveDate> {
    let caps = PERIOD_PATTERN.captures(code.trim())?;
    let year: i32 = caps[1].parse().ok()?;
    let count: u32 = caps[3].parse().ok()?;
    let month = match Frequency::from_marker(&caps[2])? {
        Frequency::Yearly => 1,
        Frequency::Monthly => count,
        Frequency::Quarterly => count.checked_mul(3)?.checked_sub(2)?,
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarterly_codes_anchor_at_quarter_start() {
        assert_eq!(
            decode_period("2020KW01"),
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
        assert_eq!(
            decode_period("2020KW02"),
            NaiveDate::from_ymd_opt(2020, 4, 1)
        );
        assert_eq!(
            decode_period("2020KW04"),
            NaiveDate::from_ymd_opt(2020, 10, 1)
        );
    }

    #[test]
    fn monthly_codes_anchor_at_month_start() {
        assert_eq!(
            decode_period("2020MM07"),
            NaiveDate::from_ymd_opt(2020, 7, 1)
        );
    }

    #[test]
    fn yearly_codes_anchor_at_january_first() {
        assert_eq!(
            decode_period("2020JJ00"),
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
    }

    #[test]
    fn unrecognized_markers_and_malformed_codes_decode_to_none() {
        assert_eq!(decode_period("2020XX01"), None);
        assert_eq!(decode_period("2020MM13"), None);
        assert_eq!(decode_period("2020KW00"), None);
        assert_eq!(decode_period("not-a-period"), None);
        assert_eq!(decode_period("x2020KW01y"), None);
    }
}
