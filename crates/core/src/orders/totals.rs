//! Order totals

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::orders::OrderError;

/// Monetary breakdown of an order. Always satisfies
/// `total = subtotal + tax + shipping - discount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    subtotal: Decimal,
    tax: Decimal,
    shipping: Decimal,
    discount: Decimal,
    total: Decimal,
}

impl OrderTotals {
    /// Build totals from their components, computing the grand total.
    pub fn new(subtotal: Decimal, tax: Decimal, shipping: Decimal, discount: Decimal) -> Self {
        Self {
            subtotal,
            tax,
            shipping,
            discount,
            total: subtotal + tax + shipping - discount,
        }
    }

    /// Build totals from components plus a claimed total, e.g. as submitted by
    /// a client.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::TotalsMismatch`] if `total` disagrees with the
    /// components.
    pub fn checked(
        subtotal: Decimal,
        tax: Decimal,
        shipping: Decimal,
        discount: Decimal,
        total: Decimal,
    ) -> Result<Self, OrderError> {
        let totals = Self::new(subtotal, tax, shipping, discount);

        if totals.total == total {
            Ok(totals)
        } else {
            Err(OrderError::TotalsMismatch {
                expected: totals.total,
                actual: total,
            })
        }
    }

    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    pub fn tax(&self) -> Decimal {
        self.tax
    }

    pub fn shipping(&self) -> Decimal {
        self.shipping
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    pub fn total(&self) -> Decimal {
        self.total
    }
}

/// Tax and shipping applied at checkout.
#[derive(Debug, Clone, Copy)]
pub struct ChargesPolicy {
    /// Fraction of the subtotal charged as tax (0.18 for 18%).
    pub tax_rate: Percentage,

    /// Flat shipping fee per order.
    pub shipping_fee: Decimal,

    /// Subtotal at or above which shipping is free.
    pub free_shipping_threshold: Option<Decimal>,
}

impl Default for ChargesPolicy {
    fn default() -> Self {
        Self {
            tax_rate: Percentage::from(0.0),
            shipping_fee: Decimal::ZERO,
            free_shipping_threshold: None,
        }
    }
}

impl ChargesPolicy {
    /// Compute totals for a subtotal and discount. Tax is rounded to cents,
    /// midpoint away from zero.
    pub fn totals_for(&self, subtotal: Decimal, discount: Decimal) -> OrderTotals {
        let tax = (self.tax_rate * subtotal)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        let shipping = match self.free_shipping_threshold {
            Some(threshold) if subtotal >= threshold => Decimal::ZERO,
            _ => self.shipping_fee,
        };

        OrderTotals::new(subtotal, tax, shipping, discount)
    }
}

/// Invalid tax rate string
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid tax rate \"{0}\", expected e.g. \"18%\" or \"0.18\"")]
pub struct InvalidTaxRate(pub String);

/// Parse a tax rate written either as a percentage (`"18%"`) or a fraction
/// (`"0.18"`).
///
/// # Errors
///
/// Returns [`InvalidTaxRate`] if the value isn't numeric or is negative.
pub fn parse_tax_rate(s: &str) -> Result<Percentage, InvalidTaxRate> {
    let trimmed = s.trim();

    let (number, divisor) = match trimmed.strip_suffix('%') {
        Some(percent) => (percent.trim(), Decimal::ONE_HUNDRED),
        None => (trimmed, Decimal::ONE),
    };

    let value = number
        .parse::<Decimal>()
        .map_err(|_err| InvalidTaxRate(s.to_string()))?;

    if value.is_sign_negative() {
        return Err(InvalidTaxRate(s.to_string()));
    }

    Ok(Percentage::from(value / divisor))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn total_is_derived_from_components() {
        let totals = OrderTotals::new(
            Decimal::new(100_00, 2),
            Decimal::new(18_00, 2),
            Decimal::new(5_00, 2),
            Decimal::new(10_00, 2),
        );

        assert_eq!(totals.total(), Decimal::new(113_00, 2));
    }

    #[test]
    fn checked_rejects_inconsistent_totals() {
        let result = OrderTotals::checked(
            Decimal::new(100, 0),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::new(90, 0),
        );

        assert_eq!(
            result,
            Err(OrderError::TotalsMismatch {
                expected: Decimal::new(100, 0),
                actual: Decimal::new(90, 0),
            })
        );
    }

    #[test]
    fn default_policy_charges_nothing_extra() {
        let totals = ChargesPolicy::default().totals_for(Decimal::new(42_50, 2), Decimal::ZERO);

        assert_eq!(totals.total(), Decimal::new(42_50, 2));
        assert_eq!(totals.tax(), Decimal::ZERO);
        assert_eq!(totals.shipping(), Decimal::ZERO);
    }

    #[test]
    fn tax_is_rounded_to_cents() -> TestResult {
        let policy = ChargesPolicy {
            tax_rate: parse_tax_rate("18%")?,
            shipping_fee: Decimal::new(100, 0),
            free_shipping_threshold: None,
        };

        let totals = policy.totals_for(Decimal::new(10_05, 2), Decimal::ZERO);

        // 18% of 10.05 is 1.809
        assert_eq!(totals.tax(), Decimal::new(1_81, 2));
        assert_eq!(totals.total(), Decimal::new(111_86, 2));

        Ok(())
    }

    #[test]
    fn shipping_is_waived_above_threshold() {
        let policy = ChargesPolicy {
            tax_rate: Percentage::from(0.0),
            shipping_fee: Decimal::new(100, 0),
            free_shipping_threshold: Some(Decimal::new(999, 0)),
        };

        assert_eq!(
            policy.totals_for(Decimal::new(999, 0), Decimal::ZERO).shipping(),
            Decimal::ZERO
        );
        assert_eq!(
            policy.totals_for(Decimal::new(998, 0), Decimal::ZERO).shipping(),
            Decimal::new(100, 0)
        );
    }

    #[test]
    fn tax_rates_parse_as_percent_or_fraction() -> TestResult {
        let subtotal = Decimal::new(200, 0);

        assert_eq!(parse_tax_rate("18%")? * subtotal, Decimal::new(36, 0));
        assert_eq!(parse_tax_rate("0.18")? * subtotal, Decimal::new(36, 0));
        assert!(parse_tax_rate("-5%").is_err());
        assert!(parse_tax_rate("lots").is_err());

        Ok(())
    }
}
