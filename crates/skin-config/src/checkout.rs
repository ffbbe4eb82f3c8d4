//! Cart checkout settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// 18% GST, in basis points.
const fn default_tax_rate_bps() -> u32 {
    1800
}

fn default_currency() -> String {
    "INR".to_string()
}

/// Upper bound for `tax_rate_bps` (100%).
pub const MAX_TAX_RATE_BPS: u32 = 10_000;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckoutConfig {
    /// Tax applied to the cart subtotal, in basis points.
    #[serde(default = "default_tax_rate_bps")]
    pub tax_rate_bps: u32,

    /// Currency code shown next to totals.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            tax_rate_bps: default_tax_rate_bps(),
            currency: default_currency(),
        }
    }
}

impl CheckoutConfig {
    /// Reject tax rates above 100%.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `tax_rate_bps` exceeds
    /// [`MAX_TAX_RATE_BPS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tax_rate_bps > MAX_TAX_RATE_BPS {
            return Err(ConfigError::InvalidValue {
                field: "checkout.tax_rate_bps".to_string(),
                reason: format!(
                    "{} exceeds the maximum of {MAX_TAX_RATE_BPS}",
                    self.tax_rate_bps
                ),
            });
        }
        Ok(())
    }
}
