mod add;
mod clear;
mod show;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CartCommands;
use crate::context::AppContext;

/// Handle `skinsense cart`.
pub async fn handle(
    action: &CartCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CartCommands::Add { product_id } => add::run(*product_id, ctx, flags).await,
        CartCommands::Show => show::run(ctx, flags).await,
        CartCommands::Update { item_id, action } => {
            update::run(*item_id, action, ctx, flags).await
        }
        CartCommands::Clear => clear::run(ctx, flags).await,
    }
}
