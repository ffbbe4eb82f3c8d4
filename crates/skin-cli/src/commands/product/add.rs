use skin_core::entities::NewProduct;
use skin_core::enums::SkinType;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_enum, parse_rupees};
use crate::context::AppContext;
use crate::output::output;

pub struct AddProductArgs<'a> {
    pub name: &'a str,
    pub brand: &'a str,
    pub product_type: &'a str,
    pub skin_type: &'a str,
    pub description: &'a str,
    pub price: Option<&'a str>,
    pub link: Option<&'a str>,
}

pub async fn run(
    args: AddProductArgs<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let new_product = build_product(&args)?;
    let product = ctx.service.insert_product(&new_product).await?;
    tracing::info!(id = product.id, name = %product.name, "product added");
    output(&product, flags.format)
}

fn build_product(args: &AddProductArgs<'_>) -> anyhow::Result<NewProduct> {
    Ok(NewProduct {
        name: args.name.trim().to_string(),
        brand: args.brand.trim().to_string(),
        product_type: args.product_type.trim().to_string(),
        skin_type: parse_enum::<SkinType>(args.skin_type, "skin type")?,
        description: args.description.trim().to_string(),
        price_paise: args.price.map(parse_rupees).transpose()?,
        link: args
            .link
            .map(str::trim)
            .filter(|link| !link.is_empty())
            .map(str::to_string),
    })
}
