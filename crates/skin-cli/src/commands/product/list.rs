use serde::Serialize;
use skin_core::entities::Product;
use skin_core::enums::SkinType;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProductListResponse {
    products: Vec<Product>,
}

pub async fn run(
    skin_type: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let skin_type = skin_type
        .map(|raw| parse_enum::<SkinType>(raw, "skin type"))
        .transpose()?;
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let products = ctx.service.list_products(skin_type, Some(limit)).await?;

    output(&ProductListResponse { products }, flags.format)
}
