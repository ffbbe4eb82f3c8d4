use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let checkout = &ctx.config.checkout;
    let cart = ctx
        .service
        .cart_view(&ctx.user, checkout.tax_rate_bps, &checkout.currency)
        .await?;
    output(&cart, flags.format)
}
