use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(review_id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ctx.service.mark_review_helpful(&ctx.user, review_id).await?;
    if !response.marked {
        tracing::info!(review = review_id, "already marked as helpful");
    }
    output(&response, flags.format)
}
