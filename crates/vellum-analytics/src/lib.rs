//! # vellum-analytics
//!
//! Pure spend-allocation and KPI aggregation over a contract snapshot.
//!
//! The whole crate is one computation, parameterized by a date interval:
//! resolve the interval from optional request parameters, partition the
//! snapshot into currently-active and interval-overlapping sets, allocate
//! each overlapping contract's value to the interval by payment cadence,
//! fold the allocations into per-vendor / per-type / per-month totals, and
//! assemble the result object the presentation layer renders.
//!
//! Nothing here mutates a contract or holds shared state; given the same
//! snapshot, interval, and `today`, the output is identical.

pub mod activity;
pub mod aggregate;
pub mod allocate;
pub mod interval;
pub mod kpi;

pub use aggregate::{DimensionSpend, SpendTrend};
pub use interval::AnalysisInterval;
pub use kpi::{AnalyticsParams, ContractSource, SpendAnalytics, compute_analytics, load_analytics};
