//! Folding allocated spend into per-dimension totals, a month-bucketed
//! trend series, and a top-contracts ranking.
//!
//! All accumulators are local to one computation and discarded with the
//! response; nothing here is shared across requests.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use vellum_core::entities::Contract;

use crate::interval::{AnalysisInterval, floor_to_month, next_month};

/// Dimension key used when a contract has no vendor name.
pub const UNKNOWN_VENDOR: &str = "Unknown Vendor";
/// Dimension key used when a contract has no type.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// One dimension's accumulated spend (a vendor or a contract type).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DimensionSpend {
    pub key: String,
    pub total: Decimal,
}

/// Insertion-ordered key → total accumulator.
///
/// Keeps first-encountered order so that descending sorts break ties
/// stably, matching the order of the underlying contract snapshot.
#[derive(Debug, Default)]
pub struct SpendBuckets {
    order: Vec<String>,
    totals: HashMap<String, Decimal>,
}

impl SpendBuckets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str, amount: Decimal) {
        if let Some(total) = self.totals.get_mut(key) {
            *total += amount;
        } else {
            self.order.push(key.to_string());
            self.totals.insert(key.to_string(), amount);
        }
    }

    /// Totals sorted descending; ties keep first-encountered order.
    #[must_use]
    pub fn into_sorted(self) -> Vec<DimensionSpend> {
        let Self { order, mut totals } = self;
        let mut spends: Vec<DimensionSpend> = order
            .into_iter()
            .filter_map(|key| {
                totals.remove(&key).map(|total| DimensionSpend { key, total })
            })
            .collect();
        spends.sort_by(|a, b| b.total.cmp(&a.total));
        spends
    }
}

/// The month-bucketed spend series rendered as the trend line.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SpendTrend {
    /// `"YYYY-MM"` month keys, in calendar order.
    pub keys: Vec<String>,
    /// Short human labels, e.g. `"Jan 24"`.
    pub labels: Vec<String>,
    pub data: Vec<Decimal>,
}

impl SpendTrend {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            keys: Vec::new(),
            labels: Vec::new(),
            data: Vec::new(),
        }
    }
}

/// Builder for [`SpendTrend`]: one zero-initialized bucket per calendar
/// month of the interval, inclusive on both ends.
#[derive(Debug)]
pub struct TrendBuckets {
    months: Vec<NaiveDate>,
    totals: HashMap<String, Decimal>,
}

impl TrendBuckets {
    /// Initialize buckets from `floor_to_month(start)` through
    /// `floor_to_month(end)`. An interval inside one month still gets its
    /// bucket; an inverted interval degenerates to no buckets.
    #[must_use]
    pub fn new(interval: &AnalysisInterval) -> Self {
        let mut months = Vec::new();
        let mut totals = HashMap::new();
        let last = floor_to_month(interval.end);
        let mut current = floor_to_month(interval.start);
        while current <= last {
            totals.insert(month_key(current), Decimal::ZERO);
            months.push(current);
            current = next_month(current);
        }
        Self { months, totals }
    }

    /// Add a lump amount to the single bucket covering `date`.
    ///
    /// Dates outside the bucket range are silently dropped — the trend only
    /// reflects months in its own displayed window.
    pub fn add_lump(&mut self, date: NaiveDate, amount: Decimal) {
        if let Some(total) = self.totals.get_mut(&month_key(floor_to_month(date))) {
            *total += amount;
        }
    }

    /// Add `per_month` to every bucket within the contract's active months.
    ///
    /// The span is clipped to the bucket range: from the later of the
    /// contract's start month and the first bucket, through the earlier of
    /// the contract's effective end and the last bucket.
    pub fn add_recurring(&mut self, start: NaiveDate, effective_end: NaiveDate, per_month: Decimal) {
        for month in &self.months {
            if *month >= floor_to_month(start) && *month <= effective_end {
                if let Some(total) = self.totals.get_mut(&month_key(*month)) {
                    *total += per_month;
                }
            }
        }
    }

    #[must_use]
    pub fn into_trend(self) -> SpendTrend {
        let Self { months, mut totals } = self;
        let mut keys = Vec::with_capacity(months.len());
        let mut labels = Vec::with_capacity(months.len());
        let mut data = Vec::with_capacity(months.len());
        for month in months {
            let key = month_key(month);
            data.push(totals.remove(&key).unwrap_or(Decimal::ZERO));
            labels.push(month.format("%b %y").to_string());
            keys.push(key);
        }
        SpendTrend { keys, labels, data }
    }
}

fn month_key(month: NaiveDate) -> String {
    month.format("%Y-%m").to_string()
}

/// The interval-overlapping set ranked by face value, descending, stable on
/// ties (original collection order), truncated to `limit`.
#[must_use]
pub fn top_contracts(overlapping: &[Contract], limit: usize) -> Vec<Contract> {
    let mut ranked: Vec<Contract> = overlapping.to_vec();
    ranked.sort_by(|a, b| b.value_or_zero().cmp(&a.value_or_zero()));
    ranked.truncate(limit);
    ranked
}
