//! Payment cadence, renewal, and allocation policy enums for Vellum.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! so the stored TEXT columns round-trip through serde.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PaymentTerms
// ---------------------------------------------------------------------------

/// How a contract's value is charged over time.
///
/// Governs spend allocation: `one_time` is recognized once on the start
/// date, `monthly` recurs per calendar month, `yearly` recurs per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTerms {
    OneTime,
    Monthly,
    Yearly,
}

impl PaymentTerms {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneTime => "one_time",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for PaymentTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RenewalType
// ---------------------------------------------------------------------------

/// Auto-renewal cadence, independent of payment terms. Display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RenewalType {
    Monthly,
    Yearly,
}

impl RenewalType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for RenewalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// YearlySpendPolicy
// ---------------------------------------------------------------------------

/// How `yearly` contracts are attributed to an analysis interval.
///
/// `lump_sum` recognizes the full value once, on the start date (the
/// default). `prorated` spreads the value across months at one twelfth per
/// month, like a monthly contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum YearlySpendPolicy {
    #[default]
    LumpSum,
    Prorated,
}

impl YearlySpendPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LumpSum => "lump_sum",
            Self::Prorated => "prorated",
        }
    }
}

impl fmt::Display for YearlySpendPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
