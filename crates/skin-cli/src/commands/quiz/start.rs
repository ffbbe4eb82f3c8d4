use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let first = ctx
        .service
        .start_quiz(&ctx.user)
        .await?
        .context("no quiz questions found. Run 'skinsense seed' first.")?;
    output(&first, flags.format)
}
