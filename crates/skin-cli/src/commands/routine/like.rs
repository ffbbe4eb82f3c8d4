use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let like = ctx.service.toggle_routine_like(&ctx.user, id).await?;
    output(&like, flags.format)
}
