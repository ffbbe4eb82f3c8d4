use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `skinsense community`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let hub = ctx.service.community_hub().await?;
    output(&hub, flags.format)
}
