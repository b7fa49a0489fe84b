use std::path::Path;

use vellum_db::repos::contract::ContractDraft;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum, parse_money};
use crate::context::AppContext;
use crate::output::output;

/// Raw flag values for `vlm contract add`.
pub struct AddFields<'a> {
    pub name: Option<&'a str>,
    pub vendor: Option<&'a str>,
    pub contract_type: Option<&'a str>,
    pub subtype: Option<&'a str>,
    pub number: Option<&'a str>,
    pub start_date: Option<&'a str>,
    pub end_date: Option<&'a str>,
    pub terms: Option<&'a str>,
    pub value: Option<&'a str>,
    pub renewal: Option<&'a str>,
    pub notice_days: Option<i64>,
    pub file: Option<&'a str>,
}

pub async fn run(
    fields: AddFields<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut draft = ContractDraft {
        contract_name: fields.name.map(str::to_string),
        vendor_name: fields.vendor.map(str::to_string),
        contract_type: fields.contract_type.map(str::to_string),
        contract_subtype: fields.subtype.map(str::to_string),
        contract_number: fields.number.map(str::to_string),
        start_date: fields
            .start_date
            .map(|raw| parse_date(raw, "start-date"))
            .transpose()?,
        end_date: fields
            .end_date
            .map(|raw| parse_date(raw, "end-date"))
            .transpose()?,
        contract_value: fields
            .value
            .map(|raw| parse_money(raw, "value"))
            .transpose()?,
        renewal_type: fields
            .renewal
            .map(|raw| parse_enum(raw, "renewal"))
            .transpose()?,
        ..ContractDraft::default()
    };
    if let Some(terms) = fields.terms {
        draft.payment_terms = parse_enum(terms, "terms")?;
    }
    if let Some(days) = fields.notice_days {
        draft.notice_period_days = days;
    }

    let mut contract = ctx.service.create_contract(draft).await?;
    if let Some(file) = fields.file {
        contract = ctx.service.attach_file(&contract.id, Path::new(file)).await?;
    }

    output(&contract, flags.format)
}
