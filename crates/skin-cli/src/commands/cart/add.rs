use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(product_id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let line = ctx.service.add_to_cart(&ctx.user, product_id).await?;
    output(&line, flags.format)
}
