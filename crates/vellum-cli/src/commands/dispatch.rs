use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Contract { action } => commands::contract::handle(&action, ctx, flags).await,
        Commands::Analyze(args) => commands::analyze::handle(&args, ctx, flags).await,
        Commands::Vendors => commands::catalog::handle_vendors(ctx, flags).await,
        Commands::Types => commands::catalog::handle_types(ctx, flags).await,
        Commands::Init(_) => {
            unreachable!("init is pre-dispatched in main")
        }
    }
}
