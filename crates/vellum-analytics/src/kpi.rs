//! KPI assembly: one result object per request, combining live-snapshot
//! KPIs, range-scoped totals, the monthly trend, and the top-contracts
//! ranking.
//!
//! The entry point never fails: a fetch error from the contract source is
//! logged and degrades to the all-zero/empty shape so the presentation
//! layer always has something renderable.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use vellum_core::entities::Contract;
use vellum_core::enums::{PaymentTerms, YearlySpendPolicy};
use vellum_core::money::round_cents;

use crate::activity::{effective_end, is_currently_active, overlaps_interval};
use crate::aggregate::{
    DimensionSpend, SpendBuckets, SpendTrend, TrendBuckets, UNCATEGORIZED, UNKNOWN_VENDOR,
    top_contracts,
};
use crate::allocate::{allocated_spend, monthly_cost};
use crate::interval::AnalysisInterval;

/// Capability to fetch the full contract snapshot.
///
/// Injected at call time; the engine holds no ambient store handle.
pub trait ContractSource {
    async fn list_all(&self) -> anyhow::Result<Vec<Contract>>;
}

/// Request parameters for one analytics run.
#[derive(Debug, Clone)]
pub struct AnalyticsParams {
    /// Optional `YYYY-MM-DD` interval start.
    pub start: Option<String>,
    /// Optional `YYYY-MM-DD` interval end.
    pub end: Option<String>,
    pub yearly_policy: YearlySpendPolicy,
    pub top_limit: usize,
}

impl Default for AnalyticsParams {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            yearly_policy: YearlySpendPolicy::default(),
            top_limit: 5,
        }
    }
}

/// The assembled KPI result consumed by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SpendAnalytics {
    // Live snapshot KPIs — computed against today, never the interval.
    pub total_active_contract_value: Decimal,
    pub monthly_recurring_cost: Decimal,
    /// Active monthly costs annualized (×12) plus active yearly values.
    pub total_annualized_spend: Decimal,
    /// One-time contract value recognized so far this calendar year.
    pub one_time_value_ytd: Decimal,

    // Range-scoped KPIs.
    pub total_spend_in_range: Decimal,
    pub spend_by_vendor: Vec<DimensionSpend>,
    pub spend_by_type: Vec<DimensionSpend>,
    pub spend_trend: SpendTrend,
    pub top_contracts: Vec<Contract>,

    pub interval: AnalysisInterval,
    pub display_interval: String,

    // Distinct-value lists for filter UI population.
    pub all_vendors: Vec<String>,
    pub all_types: Vec<String>,
}

impl SpendAnalytics {
    /// The degraded shape returned on fetch failure: zero totals, empty
    /// lists, no trend buckets. Never NaN or absent fields.
    #[must_use]
    pub fn empty(interval: &AnalysisInterval) -> Self {
        Self {
            total_active_contract_value: Decimal::ZERO,
            monthly_recurring_cost: Decimal::ZERO,
            total_annualized_spend: Decimal::ZERO,
            one_time_value_ytd: Decimal::ZERO,
            total_spend_in_range: Decimal::ZERO,
            spend_by_vendor: Vec::new(),
            spend_by_type: Vec::new(),
            spend_trend: SpendTrend::empty(),
            top_contracts: Vec::new(),
            interval: *interval,
            display_interval: interval.display(),
            all_vendors: Vec::new(),
            all_types: Vec::new(),
        }
    }
}

/// Fetch the snapshot and compute analytics, degrading on fetch failure.
pub async fn load_analytics<S: ContractSource>(
    source: &S,
    params: &AnalyticsParams,
    today: NaiveDate,
) -> SpendAnalytics {
    let interval =
        AnalysisInterval::resolve(params.start.as_deref(), params.end.as_deref(), today);
    match source.list_all().await {
        Ok(contracts) => compute_analytics(
            &contracts,
            &interval,
            params.yearly_policy,
            params.top_limit,
            today,
        ),
        Err(error) => {
            tracing::warn!(%error, "contract fetch failed; returning empty analytics");
            SpendAnalytics::empty(&interval)
        }
    }
}

/// The pure pipeline: activity filter → spend allocator → aggregator →
/// assembled result. Deterministic for a given snapshot, interval, and
/// `today`.
#[must_use]
pub fn compute_analytics(
    contracts: &[Contract],
    interval: &AnalysisInterval,
    policy: YearlySpendPolicy,
    top_limit: usize,
    today: NaiveDate,
) -> SpendAnalytics {
    let active: Vec<&Contract> = contracts
        .iter()
        .filter(|c| is_currently_active(c, today))
        .collect();

    let monthly_recurring_cost: Decimal = active
        .iter()
        .filter(|c| c.payment_terms == PaymentTerms::Monthly)
        .map(|c| c.value_or_zero())
        .sum();
    let total_active_contract_value: Decimal =
        active.iter().map(|c| c.value_or_zero()).sum();
    let active_yearly: Decimal = active
        .iter()
        .filter(|c| c.payment_terms == PaymentTerms::Yearly)
        .map(|c| c.value_or_zero())
        .sum();
    let total_annualized_spend =
        monthly_recurring_cost * Decimal::from(12) + active_yearly;

    let year_start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
    let one_time_value_ytd: Decimal = contracts
        .iter()
        .filter(|c| c.payment_terms == PaymentTerms::OneTime)
        .filter(|c| {
            c.start_date
                .is_some_and(|start| start >= year_start && start <= today)
        })
        .map(|c| c.value_or_zero())
        .sum();

    let overlapping: Vec<Contract> = contracts
        .iter()
        .filter(|c| overlaps_interval(c, interval))
        .cloned()
        .collect();

    let mut total_spend_in_range = Decimal::ZERO;
    let mut vendor_buckets = SpendBuckets::new();
    let mut type_buckets = SpendBuckets::new();
    for contract in &overlapping {
        let spend = allocated_spend(contract, interval, policy);
        if spend <= Decimal::ZERO {
            continue;
        }
        total_spend_in_range += spend;
        vendor_buckets.add(
            contract.vendor_name.as_deref().unwrap_or(UNKNOWN_VENDOR),
            spend,
        );
        type_buckets.add(
            contract.contract_type.as_deref().unwrap_or(UNCATEGORIZED),
            spend,
        );
    }

    let mut trend = TrendBuckets::new(interval);
    for contract in &overlapping {
        let Some(start) = contract.start_date else {
            continue;
        };
        if contract.value_or_zero() <= Decimal::ZERO {
            continue;
        }
        let per_month = monthly_cost(contract, policy);
        if per_month > Decimal::ZERO {
            trend.add_recurring(start, effective_end(contract), per_month);
        } else {
            trend.add_lump(start, round_cents(contract.value_or_zero()));
        }
    }

    SpendAnalytics {
        total_active_contract_value,
        monthly_recurring_cost,
        total_annualized_spend,
        one_time_value_ytd,
        total_spend_in_range,
        spend_by_vendor: vendor_buckets.into_sorted(),
        spend_by_type: type_buckets.into_sorted(),
        spend_trend: trend.into_trend(),
        top_contracts: top_contracts(&overlapping, top_limit),
        interval: *interval,
        display_interval: interval.display(),
        all_vendors: distinct(contracts.iter().map(|c| c.vendor_name.as_deref())),
        all_types: distinct(contracts.iter().map(|c| c.contract_type.as_deref())),
    }
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut out: Vec<String> = values
        .flatten()
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use vellum_core::entities::Contract;
    use vellum_core::enums::{PaymentTerms, YearlySpendPolicy};

    use super::{
        AnalyticsParams, ContractSource, SpendAnalytics, compute_analytics, load_analytics,
    };
    use crate::interval::AnalysisInterval;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contract(
        id: &str,
        vendor: Option<&str>,
        kind: Option<&str>,
        terms: PaymentTerms,
        value: Decimal,
        start: Option<(i32, u32, u32)>,
        end: Option<(i32, u32, u32)>,
    ) -> Contract {
        Contract {
            id: id.to_string(),
            contract_name: Some(format!("contract {id}")),
            vendor_name: vendor.map(str::to_string),
            contract_type: kind.map(str::to_string),
            contract_subtype: None,
            contract_number: None,
            start_date: start.map(|(y, m, d)| date(y, m, d)),
            end_date: end.map(|(y, m, d)| date(y, m, d)),
            payment_terms: terms,
            contract_value: Some(value),
            renewal_type: None,
            notice_period_days: 30,
            file_path: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn snapshot() -> Vec<Contract> {
        vec![
            // Active monthly, spans all of 2024.
            contract(
                "ctr-hosting",
                Some("Acme"),
                Some("SaaS"),
                PaymentTerms::Monthly,
                dec!(100),
                Some((2023, 6, 1)),
                None,
            ),
            // One-time inside Q1.
            contract(
                "ctr-audit",
                Some("Initech"),
                Some("Services"),
                PaymentTerms::OneTime,
                dec!(500),
                Some((2024, 2, 10)),
                None,
            ),
            // Yearly, started before Q1, ended mid-2024 — not currently active.
            contract(
                "ctr-license",
                Some("Acme"),
                Some("License"),
                PaymentTerms::Yearly,
                dec!(1200),
                Some((2023, 7, 1)),
                Some((2024, 6, 30)),
            ),
            // No start date: contributes nothing anywhere.
            contract(
                "ctr-draft",
                Some("Ghost"),
                None,
                PaymentTerms::Monthly,
                dec!(999),
                None,
                None,
            ),
        ]
    }

    fn q1_2024() -> AnalysisInterval {
        AnalysisInterval {
            start: date(2024, 1, 1),
            end: date(2024, 3, 31),
        }
    }

    // Fixed "today" after the yearly contract lapsed.
    fn today() -> NaiveDate {
        date(2024, 7, 15)
    }

    #[test]
    fn range_total_combines_cadences() {
        let analytics = compute_analytics(
            &snapshot(),
            &q1_2024(),
            YearlySpendPolicy::LumpSum,
            5,
            today(),
        );
        // Monthly: 3 × 100; one-time: 500; yearly lump-sum started outside Q1.
        assert_eq!(analytics.total_spend_in_range, dec!(800));

        let vendors: Vec<(&str, Decimal)> = analytics
            .spend_by_vendor
            .iter()
            .map(|s| (s.key.as_str(), s.total))
            .collect();
        assert_eq!(vendors, vec![("Initech", dec!(500)), ("Acme", dec!(300))]);
    }

    #[test]
    fn snapshot_kpis_ignore_interval() {
        let contracts = snapshot();
        let q1 = compute_analytics(
            &contracts,
            &q1_2024(),
            YearlySpendPolicy::LumpSum,
            5,
            today(),
        );
        let one_day = compute_analytics(
            &contracts,
            &AnalysisInterval {
                start: date(2026, 5, 1),
                end: date(2026, 5, 1),
            },
            YearlySpendPolicy::LumpSum,
            5,
            today(),
        );

        assert_eq!(q1.monthly_recurring_cost, one_day.monthly_recurring_cost);
        assert_eq!(
            q1.total_active_contract_value,
            one_day.total_active_contract_value
        );
        assert_eq!(q1.monthly_recurring_cost, dec!(100));
        // The yearly contract ended June 30 and is out; the open-ended
        // monthly and one-time contracts are in.
        assert_eq!(q1.total_active_contract_value, dec!(600));
        assert_eq!(q1.total_annualized_spend, dec!(1200));
    }

    #[test]
    fn one_time_value_ytd_tracks_current_year_only() {
        let mut contracts = snapshot();
        contracts.push(contract(
            "ctr-old-setup",
            None,
            None,
            PaymentTerms::OneTime,
            dec!(300),
            Some((2023, 5, 1)),
            None,
        ));
        let analytics = compute_analytics(
            &contracts,
            &q1_2024(),
            YearlySpendPolicy::LumpSum,
            5,
            today(),
        );
        // Only the Feb 2024 audit counts; the 2023 setup fee does not.
        assert_eq!(analytics.one_time_value_ytd, dec!(500));
    }

    #[test]
    fn trend_mixes_lump_and_recurring() {
        let analytics = compute_analytics(
            &snapshot(),
            &q1_2024(),
            YearlySpendPolicy::LumpSum,
            5,
            today(),
        );
        assert_eq!(analytics.spend_trend.labels, vec!["Jan 24", "Feb 24", "Mar 24"]);
        // 100 monthly each month, plus the 500 one-time in February.
        assert_eq!(
            analytics.spend_trend.data,
            vec![dec!(100), dec!(600), dec!(100)]
        );
    }

    #[test]
    fn prorated_policy_spreads_yearly_across_trend() {
        let analytics = compute_analytics(
            &snapshot(),
            &q1_2024(),
            YearlySpendPolicy::Prorated,
            5,
            today(),
        );
        // 100 monthly + 100 prorated yearly per month, plus the February lump.
        assert_eq!(
            analytics.spend_trend.data,
            vec![dec!(200), dec!(700), dec!(200)]
        );
        assert_eq!(analytics.total_spend_in_range, dec!(1100));
    }

    #[test]
    fn defaults_substitute_for_missing_dimensions() {
        let contracts = vec![contract(
            "ctr-anon",
            None,
            None,
            PaymentTerms::OneTime,
            dec!(50),
            Some((2024, 1, 5)),
            None,
        )];
        let analytics = compute_analytics(
            &contracts,
            &q1_2024(),
            YearlySpendPolicy::LumpSum,
            5,
            today(),
        );
        assert_eq!(analytics.spend_by_vendor[0].key, "Unknown Vendor");
        assert_eq!(analytics.spend_by_type[0].key, "Uncategorized");
    }

    #[test]
    fn computation_is_idempotent() {
        let contracts = snapshot();
        let first = compute_analytics(
            &contracts,
            &q1_2024(),
            YearlySpendPolicy::LumpSum,
            5,
            today(),
        );
        let second = compute_analytics(
            &contracts,
            &q1_2024(),
            YearlySpendPolicy::LumpSum,
            5,
            today(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_lists_are_sorted_and_deduped() {
        let analytics = compute_analytics(
            &snapshot(),
            &q1_2024(),
            YearlySpendPolicy::LumpSum,
            5,
            today(),
        );
        assert_eq!(analytics.all_vendors, vec!["Acme", "Ghost", "Initech"]);
        assert_eq!(analytics.all_types, vec!["License", "SaaS", "Services"]);
    }

    #[test]
    fn inverted_interval_yields_empty_range_kpis() {
        let analytics = compute_analytics(
            &snapshot(),
            &AnalysisInterval {
                start: date(2024, 9, 1),
                end: date(2024, 3, 1),
            },
            YearlySpendPolicy::LumpSum,
            5,
            today(),
        );
        assert_eq!(analytics.total_spend_in_range, dec!(0));
        assert!(analytics.spend_by_vendor.is_empty());
        assert!(analytics.spend_trend.keys.is_empty());
        // Snapshot KPIs are unaffected.
        assert_eq!(analytics.monthly_recurring_cost, dec!(100));
    }

    struct FixedSource(Vec<Contract>);

    impl ContractSource for FixedSource {
        async fn list_all(&self) -> anyhow::Result<Vec<Contract>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl ContractSource for FailingSource {
        async fn list_all(&self) -> anyhow::Result<Vec<Contract>> {
            Err(anyhow::anyhow!("store unreachable"))
        }
    }

    #[tokio::test]
    async fn load_analytics_resolves_interval_from_params() {
        let params = AnalyticsParams {
            start: Some(String::from("2024-01-01")),
            end: Some(String::from("2024-03-31")),
            ..AnalyticsParams::default()
        };
        let analytics = load_analytics(&FixedSource(snapshot()), &params, today()).await;
        assert_eq!(analytics.display_interval, "Jan 2024 - Mar 2024");
        assert_eq!(analytics.total_spend_in_range, dec!(800));
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_empty_shape() {
        let analytics =
            load_analytics(&FailingSource, &AnalyticsParams::default(), today()).await;
        let expected = SpendAnalytics::empty(&AnalysisInterval {
            start: date(2024, 1, 1),
            end: today(),
        });
        assert_eq!(analytics, expected);
        assert_eq!(analytics.total_spend_in_range, dec!(0));
        assert!(analytics.top_contracts.is_empty());
    }

    #[test]
    fn serialized_shape_is_stable() {
        let analytics = SpendAnalytics::empty(&q1_2024());
        let json = serde_json::to_value(&analytics).unwrap();
        assert_eq!(json["total_spend_in_range"], "0");
        assert_eq!(json["display_interval"], "Jan 2024 - Mar 2024");
        assert!(json["spend_by_vendor"].as_array().unwrap().is_empty());
    }
}
