//! Money rounding helpers.
//!
//! All monetary totals are `rust_decimal::Decimal` in a single implicit
//! currency. Allocated spend is rounded to cent precision with half-up
//! rounding; totals must never be non-finite, which `Decimal` guarantees.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to 2 decimal places, half-up on the cent.
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
