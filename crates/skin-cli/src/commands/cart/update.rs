use serde::Serialize;
use skin_core::entities::CartLine;
use skin_core::enums::CartAction;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CartUpdateResponse {
    item_id: i64,
    action: CartAction,
    removed: bool,
    line: Option<CartLine>,
}

pub async fn run(
    item_id: i64,
    action: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let action = parse_enum::<CartAction>(action, "action")?;
    let line = ctx
        .service
        .update_cart_item(&ctx.user, item_id, action)
        .await?;

    output(
        &CartUpdateResponse {
            item_id,
            action,
            removed: line.is_none(),
            line,
        },
        flags.format,
    )
}
