use vellum_db::updates::contract::ContractUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum, parse_money};
use crate::context::AppContext;
use crate::output::output;

/// Raw flag values for `vlm contract update`. Only set fields are touched;
/// the clear flags write NULL.
pub struct UpdateFields<'a> {
    pub name: Option<&'a str>,
    pub vendor: Option<&'a str>,
    pub contract_type: Option<&'a str>,
    pub subtype: Option<&'a str>,
    pub number: Option<&'a str>,
    pub start_date: Option<&'a str>,
    pub end_date: Option<&'a str>,
    pub clear_end_date: bool,
    pub terms: Option<&'a str>,
    pub value: Option<&'a str>,
    pub clear_value: bool,
    pub renewal: Option<&'a str>,
    pub notice_days: Option<i64>,
}

pub async fn run(
    id: &str,
    fields: UpdateFields<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = ContractUpdateBuilder::new();

    if let Some(name) = fields.name {
        builder = builder.contract_name(Some(name.to_string()));
    }
    if let Some(vendor) = fields.vendor {
        builder = builder.vendor_name(Some(vendor.to_string()));
    }
    if let Some(kind) = fields.contract_type {
        builder = builder.contract_type(Some(kind.to_string()));
    }
    if let Some(subtype) = fields.subtype {
        builder = builder.contract_subtype(Some(subtype.to_string()));
    }
    if let Some(number) = fields.number {
        builder = builder.contract_number(Some(number.to_string()));
    }
    if let Some(raw) = fields.start_date {
        builder = builder.start_date(Some(parse_date(raw, "start-date")?));
    }
    if fields.clear_end_date {
        builder = builder.end_date(None);
    } else if let Some(raw) = fields.end_date {
        builder = builder.end_date(Some(parse_date(raw, "end-date")?));
    }
    if let Some(terms) = fields.terms {
        builder = builder.payment_terms(parse_enum(terms, "terms")?);
    }
    if fields.clear_value {
        builder = builder.contract_value(None);
    } else if let Some(raw) = fields.value {
        builder = builder.contract_value(Some(parse_money(raw, "value")?));
    }
    if let Some(renewal) = fields.renewal {
        builder = builder.renewal_type(Some(parse_enum(renewal, "renewal")?));
    }
    if let Some(days) = fields.notice_days {
        builder = builder.notice_period_days(days);
    }

    let contract = ctx.service.update_contract(id, builder.build()).await?;
    output(&contract, flags.format)
}
