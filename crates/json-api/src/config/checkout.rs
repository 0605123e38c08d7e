//! Checkout Charges Config

use clap::Args;
use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use storefront::orders::{ChargesPolicy, parse_tax_rate};

/// Tax and shipping settings.
#[derive(Debug, Args)]
pub struct ChargesConfig {
    /// Tax rate, as a percentage ("18%") or a fraction ("0.18")
    #[arg(long, env = "TAX_RATE", default_value = "0", value_parser = parse_tax_rate)]
    pub tax_rate: Percentage,

    /// Flat shipping fee per order
    #[arg(long, env = "SHIPPING_FEE", default_value = "0")]
    pub shipping_fee: Decimal,

    /// Subtotal at or above which shipping is free
    #[arg(long, env = "FREE_SHIPPING_THRESHOLD")]
    pub free_shipping_threshold: Option<Decimal>,
}

impl ChargesConfig {
    /// The checkout policy these settings describe.
    #[must_use]
    pub fn policy(&self) -> ChargesPolicy {
        ChargesPolicy {
            tax_rate: self.tax_rate,
            shipping_fee: self.shipping_fee,
            free_shipping_threshold: self.free_shipping_threshold,
        }
    }
}
