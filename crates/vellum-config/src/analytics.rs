//! Spend analytics configuration.

use serde::{Deserialize, Serialize};
use vellum_core::enums::YearlySpendPolicy;

/// Default number of top contracts returned by the analyzer.
const fn default_top_contracts_limit() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyticsConfig {
    /// How yearly contracts are attributed to an analysis interval.
    /// `lump_sum` recognizes the full value on the start date; `prorated`
    /// spreads one twelfth per month.
    #[serde(default)]
    pub yearly_spend_policy: YearlySpendPolicy,

    /// Size of the top-contracts ranking.
    #[serde(default = "default_top_contracts_limit")]
    pub top_contracts_limit: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            yearly_spend_policy: YearlySpendPolicy::default(),
            top_contracts_limit: default_top_contracts_limit(),
        }
    }
}
