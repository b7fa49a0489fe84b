use serde::Serialize;
use vellum_core::entities::Contract;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ContractListResponse {
    contracts: Vec<Contract>,
}

pub async fn run(
    vendor: Option<&str>,
    contract_type: Option<&str>,
    search: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let fetch_limit = compute_fetch_limit(limit, vendor, contract_type, search);

    let mut contracts = ctx.service.list_contracts(fetch_limit).await?;
    contracts = apply_filters(contracts, vendor, contract_type, search);
    contracts.truncate(usize::try_from(limit)?);

    output(&ContractListResponse { contracts }, flags.format)
}

fn compute_fetch_limit(
    limit: u32,
    vendor: Option<&str>,
    contract_type: Option<&str>,
    search: Option<&str>,
) -> u32 {
    if vendor.is_some() || contract_type.is_some() || search.is_some() {
        limit.saturating_mul(5).min(500)
    } else {
        limit
    }
}

fn apply_filters(
    mut contracts: Vec<Contract>,
    vendor: Option<&str>,
    contract_type: Option<&str>,
    search: Option<&str>,
) -> Vec<Contract> {
    if let Some(vendor) = vendor {
        contracts.retain(|c| c.vendor_name.as_deref() == Some(vendor));
    }
    if let Some(kind) = contract_type {
        contracts.retain(|c| c.contract_type.as_deref() == Some(kind));
    }
    if let Some(query) = search {
        let query = query.to_lowercase();
        contracts.retain(|c| {
            [&c.contract_name, &c.vendor_name, &c.contract_number]
                .into_iter()
                .any(|field| {
                    field
                        .as_deref()
                        .is_some_and(|value| value.to_lowercase().contains(&query))
                })
        });
    }
    contracts
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use vellum_core::entities::Contract;
    use vellum_core::enums::PaymentTerms;

    use super::{apply_filters, compute_fetch_limit};

    fn mk(id: &str, name: &str, vendor: Option<&str>, kind: Option<&str>) -> Contract {
        Contract {
            id: id.to_string(),
            contract_name: Some(name.to_string()),
            vendor_name: vendor.map(str::to_string),
            contract_type: kind.map(str::to_string),
            contract_subtype: None,
            contract_number: Some(format!("{id}-2024")),
            start_date: None,
            end_date: None,
            payment_terms: PaymentTerms::OneTime,
            contract_value: None,
            renewal_type: None,
            notice_period_days: 30,
            file_path: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn filters_by_vendor_and_type() {
        let contracts = vec![
            mk("ctr-1", "Hosting", Some("Acme"), Some("SaaS")),
            mk("ctr-2", "Audit", Some("Initech"), Some("Services")),
            mk("ctr-3", "Backup", Some("Acme"), Some("Services")),
        ];
        let filtered = apply_filters(contracts, Some("Acme"), Some("Services"), None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "ctr-3");
    }

    #[test]
    fn search_is_case_insensitive_over_name_vendor_number() {
        let contracts = vec![
            mk("ctr-1", "Cloud Hosting", Some("Acme"), None),
            mk("ctr-2", "Audit", Some("Initech"), None),
        ];
        let by_name = apply_filters(contracts.clone(), None, None, Some("hosting"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "ctr-1");

        let by_vendor = apply_filters(contracts.clone(), None, None, Some("INITECH"));
        assert_eq!(by_vendor.len(), 1);
        assert_eq!(by_vendor[0].id, "ctr-2");

        let by_number = apply_filters(contracts, None, None, Some("ctr-2-2024"));
        assert_eq!(by_number.len(), 1);
    }

    #[test]
    fn boosts_fetch_limit_when_any_filter_present() {
        assert_eq!(compute_fetch_limit(20, Some("Acme"), None, None), 100);
        assert_eq!(compute_fetch_limit(20, None, Some("SaaS"), None), 100);
        assert_eq!(compute_fetch_limit(20, None, None, Some("audit")), 100);
        assert_eq!(compute_fetch_limit(20, None, None, None), 20);
    }
}
