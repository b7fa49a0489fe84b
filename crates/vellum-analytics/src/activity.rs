//! Activity predicates over the contract snapshot.
//!
//! Two independent filters: currently-active (against today's date, for the
//! live snapshot KPIs) and interval-overlap (against the analysis interval,
//! for everything range-scoped). A contract without a `start_date` passes
//! neither.

use chrono::NaiveDate;
use vellum_core::entities::Contract;

use crate::interval::AnalysisInterval;

/// Sentinel end date for open-ended contracts.
#[must_use]
pub fn far_future() -> NaiveDate {
    NaiveDate::from_ymd_opt(2999, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// The contract's end date, or the far-future sentinel if open-ended.
#[must_use]
pub fn effective_end(contract: &Contract) -> NaiveDate {
    contract.end_date.unwrap_or_else(far_future)
}

/// True iff the contract has started and has not ended as of `today`.
///
/// Never affected by the analysis interval.
#[must_use]
pub fn is_currently_active(contract: &Contract, today: NaiveDate) -> bool {
    match contract.start_date {
        Some(start) => start <= today && contract.end_date.is_none_or(|end| end >= today),
        None => false,
    }
}

/// True iff the contract's active span shares at least one day with the
/// interval: closed intervals `[a,b]` and `[c,d]` overlap iff `a <= d` and
/// `b >= c`.
#[must_use]
pub fn overlaps_interval(contract: &Contract, interval: &AnalysisInterval) -> bool {
    match contract.start_date {
        Some(start) => start <= interval.end && effective_end(contract) >= interval.start,
        None => false,
    }
}
