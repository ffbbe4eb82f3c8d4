use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Product;

/// One product line in a user's cart. A product appears at most once per cart.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CartLine {
    pub item_id: i64,
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Line price in paise, or `None` when the product has no price.
    #[must_use]
    pub fn line_total_paise(&self) -> Option<i64> {
        self.product
            .price_paise
            .map(|price| price * i64::from(self.quantity))
    }
}
