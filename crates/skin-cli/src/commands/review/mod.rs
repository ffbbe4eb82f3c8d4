mod add;
mod helpful;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReviewCommands;
use crate::context::AppContext;

/// Handle `skinsense review`.
pub async fn handle(
    action: &ReviewCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReviewCommands::Add {
            product_id,
            rating,
            title,
            body,
            skin_type,
            effectiveness,
            value_for_money,
            usage_duration,
            not_recommended,
        } => {
            let args = add::AddReviewArgs {
                rating: *rating,
                title,
                body,
                skin_type,
                effectiveness: *effectiveness,
                value_for_money: *value_for_money,
                usage_duration,
                would_recommend: !*not_recommended,
            };
            add::run(*product_id, args, ctx, flags).await
        }
        ReviewCommands::Helpful { review_id } => helpful::run(*review_id, ctx, flags).await,
        ReviewCommands::List { product_id, limit } => {
            list::run(*product_id, *limit, ctx, flags).await
        }
    }
}
