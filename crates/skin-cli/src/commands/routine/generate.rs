use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// `skinsense routine <skin_type>`.
pub async fn run(skin_type: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tag = skin_type.trim().to_ascii_lowercase();
    let routine = ctx.service.routine_for_tag(&tag).await?;
    output(&routine, flags.format)
}
