//! Cart totals.
//!
//! Amounts are integer paise. Tax is expressed in basis points
//! (1800 = 18% GST) and rounded half-up to whole paise.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::CartLine;

/// Default tax rate: 18% GST.
pub const DEFAULT_TAX_RATE_BPS: u32 = 1800;

const BPS_SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CartTotals {
    pub item_count: u32,
    pub subtotal_paise: i64,
    pub tax_paise: i64,
    pub total_paise: i64,
}

/// Sum a cart. Lines whose product has no price count toward `item_count`
/// but add nothing to the subtotal.
#[must_use]
pub fn cart_totals(lines: &[CartLine], tax_rate_bps: u32) -> CartTotals {
    let item_count = lines.iter().map(|line| line.quantity).sum();
    let subtotal_paise: i64 = lines.iter().filter_map(CartLine::line_total_paise).sum();
    let tax_paise = (subtotal_paise * i64::from(tax_rate_bps) + BPS_SCALE / 2) / BPS_SCALE;
    CartTotals {
        item_count,
        subtotal_paise,
        tax_paise,
        total_paise: subtotal_paise + tax_paise,
    }
}

/// Format paise as rupees, e.g. `1234.50`.
#[must_use]
pub fn format_paise(paise: i64) -> String {
    let sign = if paise < 0 { "-" } else { "" };
    let abs = paise.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
