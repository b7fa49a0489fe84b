use vellum_analytics::{AnalyticsParams, ContractSource, load_analytics};
use vellum_core::entities::Contract;
use vellum_core::enums::YearlySpendPolicy;
use vellum_db::service::VellumService;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

struct ServiceSource<'a>(&'a VellumService);

impl ContractSource for ServiceSource<'_> {
    async fn list_all(&self) -> anyhow::Result<Vec<Contract>> {
        self.0.list_all_contracts().await.map_err(anyhow::Error::from)
    }
}

/// Handle `vlm analyze`.
pub async fn handle(
    args: &AnalyzeArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let yearly_policy: YearlySpendPolicy = args
        .yearly_policy
        .as_deref()
        .map(|value| parse_enum(value, "yearly-policy"))
        .transpose()?
        .unwrap_or(ctx.config.analytics.yearly_spend_policy);
    let top_limit = args.top.unwrap_or(ctx.config.analytics.top_contracts_limit);

    let params = AnalyticsParams {
        start: args.start.clone(),
        end: args.end.clone(),
        yearly_policy,
        top_limit,
    };

    let today = chrono::Local::now().date_naive();
    let analytics = load_analytics(&ServiceSource(&ctx.service), &params, today).await;
    output(&analytics, flags.format)
}
