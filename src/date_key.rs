//! Canonical date-key format helpers.
//!
//! The store itself accepts any string as a key and matches it exactly.
//! These helpers exist for consumers that move between real dates and keys,
//! keeping them on the canonical `YYYY-MM-DD` format the widget's date
//! library uses.

use chrono::NaiveDate;

use crate::error::{CalGridError, CalGridResult};

/// Canonical date key format (chrono strftime syntax).
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a day as a canonical date key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a canonical date key back into a day.
pub fn parse_date_key(key: &str) -> CalGridResult<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .map_err(|_| CalGridError::InvalidDateKey(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_day_as_key() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(date_key(day), "2024-05-01");
    }

    #[test]
    fn key_roundtrips_to_same_day() {
        let day = NaiveDate::from_ymd_opt(2031, 12, 31).unwrap();
        assert_eq!(parse_date_key(&date_key(day)).unwrap(), day);
    }

    #[test]
    fn rejects_non_canonical_keys() {
        for bad in ["2024/05/01", "May 1st", "2024-13-01", ""] {
            let err = parse_date_key(bad).unwrap_err();
            assert!(matches!(err, CalGridError::InvalidDateKey(_)), "{}", bad);
        }
    }
}
