use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CartClearResponse {
    removed: u64,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let removed = ctx.service.clear_cart(&ctx.user).await?;
    output(&CartClearResponse { removed }, flags.format)
}
