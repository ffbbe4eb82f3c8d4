mod add;
mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProductCommands;
use crate::context::AppContext;

/// Handle `skinsense product`.
pub async fn handle(
    action: &ProductCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProductCommands::List { skin_type, limit } => {
            list::run(skin_type.as_deref(), *limit, ctx, flags).await
        }
        ProductCommands::Get { id } => get::run(*id, ctx, flags).await,
        ProductCommands::Add {
            name,
            brand,
            product_type,
            skin_type,
            description,
            price,
            link,
        } => {
            add::run(
                add::AddProductArgs {
                    name,
                    brand,
                    product_type,
                    skin_type,
                    description,
                    price: price.as_deref(),
                    link: link.as_deref(),
                },
                ctx,
                flags,
            )
            .await
        }
    }
}
