use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `skinsense seed`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = ctx.service.seed().await?;
    output(&report, flags.format)
}
