use crate::cli::GlobalFlags;
use crate::cli::subcommands::ContractCommands;
use crate::context::AppContext;

mod add;
mod attach;
mod detach;
mod get;
mod list;
mod remove;
mod update;

/// Handle `vlm contract`.
pub async fn handle(
    action: &ContractCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ContractCommands::Add {
            name,
            vendor,
            contract_type,
            subtype,
            number,
            start_date,
            end_date,
            terms,
            value,
            renewal,
            notice_days,
            file,
        } => {
            add::run(
                add::AddFields {
                    name: name.as_deref(),
                    vendor: vendor.as_deref(),
                    contract_type: contract_type.as_deref(),
                    subtype: subtype.as_deref(),
                    number: number.as_deref(),
                    start_date: start_date.as_deref(),
                    end_date: end_date.as_deref(),
                    terms: terms.as_deref(),
                    value: value.as_deref(),
                    renewal: renewal.as_deref(),
                    notice_days: *notice_days,
                    file: file.as_deref(),
                },
                ctx,
                flags,
            )
            .await
        }
        ContractCommands::Update {
            id,
            name,
            vendor,
            contract_type,
            subtype,
            number,
            start_date,
            end_date,
            clear_end_date,
            terms,
            value,
            clear_value,
            renewal,
            notice_days,
        } => {
            update::run(
                id,
                update::UpdateFields {
                    name: name.as_deref(),
                    vendor: vendor.as_deref(),
                    contract_type: contract_type.as_deref(),
                    subtype: subtype.as_deref(),
                    number: number.as_deref(),
                    start_date: start_date.as_deref(),
                    end_date: end_date.as_deref(),
                    clear_end_date: *clear_end_date,
                    terms: terms.as_deref(),
                    value: value.as_deref(),
                    clear_value: *clear_value,
                    renewal: renewal.as_deref(),
                    notice_days: *notice_days,
                },
                ctx,
                flags,
            )
            .await
        }
        ContractCommands::List {
            vendor,
            contract_type,
            search,
            limit,
        } => {
            list::run(
                vendor.as_deref(),
                contract_type.as_deref(),
                search.as_deref(),
                *limit,
                ctx,
                flags,
            )
            .await
        }
        ContractCommands::Get { id } => get::run(id, ctx, flags).await,
        ContractCommands::Remove { id } => remove::run(id, ctx, flags).await,
        ContractCommands::Attach { id, file } => attach::run(id, file, ctx, flags).await,
        ContractCommands::Detach { id } => detach::run(id, ctx, flags).await,
    }
}
