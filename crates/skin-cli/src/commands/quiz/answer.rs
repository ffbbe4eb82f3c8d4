use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    question_id: i64,
    option_id: i64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let recorded = ctx
        .service
        .record_answer(&ctx.user, question_id, option_id)
        .await?;
    if recorded.complete {
        tracing::info!(user = %ctx.user, "all questions answered; run 'skinsense quiz result'");
    }
    output(&recorded, flags.format)
}
