//! Row-to-entity parsing helpers.
//!
//! The contract repo converts `libsql::Row` (column-indexed) into typed
//! entity structs. These helpers isolate the parsing logic: TEXT calendar
//! dates, TEXT decimal money columns, the dual datetime format issue
//! (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`), and snake_case
//! enum columns.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column as a calendar date (`YYYY-MM-DD`).
///
/// Calendar dates carry no timezone; parsing stays date-only so stored
/// `YYYY-MM-DD` strings never shift by a day.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not a valid `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<NaiveDate>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_date(s)?)),
        _ => Ok(None),
    }
}

/// Parse an optional TEXT money column as `Option<Decimal>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string is not a valid decimal.
pub fn parse_optional_decimal(s: Option<&str>) -> Result<Option<Decimal>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Decimal::from_str(s)
            .map(Some)
            .map_err(|e| DatabaseError::Query(format!("Failed to parse decimal '{s}': {e}"))),
        _ => Ok(None),
    }
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all vellum-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Parse an optional TEXT column into `Option<Enum>`. NULL and empty map to `None`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string does not match any variant.
pub fn parse_optional_enum<T: serde::de::DeserializeOwned>(
    s: Option<&str>,
) -> Result<Option<T>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_enum(s)?)),
        _ => Ok(None),
    }
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use vellum_core::enums::PaymentTerms;

    use super::{parse_date, parse_datetime, parse_enum, parse_optional_date, parse_optional_decimal};

    #[test]
    fn parses_both_datetime_formats() {
        assert!(parse_datetime("2026-02-09T14:30:00+00:00").is_ok());
        assert!(parse_datetime("2026-02-09 14:30:00").is_ok());
        assert!(parse_datetime("not a date").is_err());
    }

    #[test]
    fn parses_calendar_dates_without_shift() {
        let date = parse_date("2024-01-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn optional_date_treats_null_and_empty_as_none() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("")).unwrap(), None);
        assert!(parse_optional_date(Some("2024-13-01")).is_err());
    }

    #[test]
    fn decimal_column_roundtrip() {
        assert_eq!(
            parse_optional_decimal(Some("1234.56")).unwrap(),
            Some(dec!(1234.56))
        );
        assert_eq!(parse_optional_decimal(None).unwrap(), None);
        assert!(parse_optional_decimal(Some("12,34")).is_err());
    }

    #[test]
    fn enum_column_parses_snake_case() {
        let terms: PaymentTerms = parse_enum("one_time").unwrap();
        assert_eq!(terms, PaymentTerms::OneTime);
        assert!(parse_enum::<PaymentTerms>("biweekly").is_err());
    }
}
