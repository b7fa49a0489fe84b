//! Analysis interval resolution and calendar-month arithmetic.

use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The date range over which range-scoped KPIs are computed.
///
/// Ephemeral, derived per request. `start > end` is allowed; downstream
/// overlap arithmetic then yields empty results rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AnalysisInterval {
    /// Resolve optional `YYYY-MM-DD` request parameters into a concrete interval.
    ///
    /// `end` defaults to `today`; `start` defaults to January 1 of `today`'s
    /// year. Parsing is calendar-date only — no timezone anchoring, so stored
    /// date strings never shift by a day. An unparseable parameter falls back
    /// to the default for that bound.
    #[must_use]
    pub fn resolve(start: Option<&str>, end: Option<&str>, today: NaiveDate) -> Self {
        let default_start =
            NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
        Self {
            start: start.and_then(parse_date_param).unwrap_or(default_start),
            end: end.and_then(parse_date_param).unwrap_or(today),
        }
    }

    /// Human-readable month span, e.g. `"Jan 2024 - Dec 2024"`.
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%b %Y"),
            self.end.format("%b %Y")
        )
    }
}

fn parse_date_param(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// First day of the date's calendar month.
#[must_use]
pub fn floor_to_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the following calendar month.
#[must_use]
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MAX)
}

/// Signed calendar-month difference `later - earlier`, ignoring days.
///
/// January to February is 1; the allocator adds 1 for inclusive counts.
#[must_use]
pub fn months_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    let later_index = i64::from(later.year()) * 12 + i64::from(later.month0());
    let earlier_index = i64::from(earlier.year()) * 12 + i64::from(earlier.month0());
    later_index - earlier_index
}
