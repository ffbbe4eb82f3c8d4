use clap::Subcommand;

/// Cart commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CartCommands {
    /// Add one unit of a product
    Add {
        /// Product ID
        product_id: i64,
    },
    /// Show cart lines and totals
    Show,
    /// Change a cart line's quantity
    Update {
        /// Cart item ID
        item_id: i64,
        /// Action: increase, decrease, remove
        action: String,
    },
    /// Remove every line
    Clear,
}
