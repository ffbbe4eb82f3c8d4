use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Init(_) => anyhow::bail!("init is handled before context bootstrap"),
        Commands::Seed => crate::commands::seed::handle(ctx, flags).await,
        Commands::Quiz { action } => crate::commands::quiz::handle(&action, ctx, flags).await,
        Commands::Routine(args) => crate::commands::routine::handle(&args, ctx, flags).await,
        Commands::Product { action } => crate::commands::product::handle(&action, ctx, flags).await,
        Commands::Progress { action } => {
            crate::commands::progress::handle(&action, ctx, flags).await
        }
        Commands::Cart { action } => crate::commands::cart::handle(&action, ctx, flags).await,
        Commands::Review { action } => crate::commands::review::handle(&action, ctx, flags).await,
        Commands::Community => crate::commands::community::handle(ctx, flags).await,
    }
}
