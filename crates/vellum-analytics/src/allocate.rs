//! Spend allocation: the portion of a contract's value attributed to an
//! analysis interval, by payment cadence.
//!
//! - `one_time` (and `yearly` under the lump-sum policy): the full value is
//!   recognized exactly once, on the start date — it counts iff that date
//!   falls inside the interval.
//! - `monthly` (and `yearly` under the prorated policy, at one twelfth):
//!   whole calendar months of overlap between the contract's active span and
//!   the interval, counted inclusively. Partial months count as full months;
//!   there is no daily proration.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use vellum_core::entities::Contract;
use vellum_core::enums::{PaymentTerms, YearlySpendPolicy};
use vellum_core::money::round_cents;

use crate::activity::effective_end;
use crate::interval::{AnalysisInterval, months_between};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Spend attributed to `interval`, rounded to the cent.
///
/// Callers must treat non-positive results as "nothing to record".
#[must_use]
pub fn allocated_spend(
    contract: &Contract,
    interval: &AnalysisInterval,
    policy: YearlySpendPolicy,
) -> Decimal {
    let value = contract.value_or_zero();
    match contract.payment_terms {
        PaymentTerms::OneTime => lump_sum(contract.start_date, value, interval),
        PaymentTerms::Yearly => match policy {
            YearlySpendPolicy::LumpSum => lump_sum(contract.start_date, value, interval),
            YearlySpendPolicy::Prorated => {
                recurring(contract, value / MONTHS_PER_YEAR, interval)
            }
        },
        PaymentTerms::Monthly => recurring(contract, value, interval),
    }
}

/// Per-month cost of a recurring contract under the given policy, rounded to
/// the cent. Zero for one-time contracts and for lump-sum yearly ones.
#[must_use]
pub fn monthly_cost(contract: &Contract, policy: YearlySpendPolicy) -> Decimal {
    match contract.payment_terms {
        PaymentTerms::Monthly => round_cents(contract.value_or_zero()),
        PaymentTerms::Yearly if policy == YearlySpendPolicy::Prorated => {
            round_cents(contract.value_or_zero() / MONTHS_PER_YEAR)
        }
        PaymentTerms::OneTime | PaymentTerms::Yearly => Decimal::ZERO,
    }
}

fn lump_sum(start_date: Option<NaiveDate>, value: Decimal, interval: &AnalysisInterval) -> Decimal {
    match start_date {
        Some(start) if start >= interval.start && start <= interval.end => round_cents(value),
        _ => Decimal::ZERO,
    }
}

fn recurring(contract: &Contract, per_month: Decimal, interval: &AnalysisInterval) -> Decimal {
    let Some(start) = contract.start_date else {
        return Decimal::ZERO;
    };

    let overlap_start = start.max(interval.start);
    let overlap_end = effective_end(contract).min(interval.end);
    if overlap_start >= overlap_end {
        return Decimal::ZERO;
    }

    // Inclusive month count: January through February is 2 months, not 1.
    let months = months_between(overlap_end, overlap_start) + 1;
    round_cents(per_month * Decimal::from(months))
}
