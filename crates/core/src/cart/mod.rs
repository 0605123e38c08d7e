//! Cart
//!
//! A cart is a plain value: every operation takes the cart explicitly and
//! persistence is left to the caller.

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

mod errors;
mod line;
mod reconcile;

pub use errors::CartError;
pub use line::{CartLine, CartLineUuid, LineKey};
pub use reconcile::reconcile;

use line::check_stock;

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from existing lines, e.g. ones restored from storage or
    /// pushed by a client.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`] / [`CartError::StockUnavailable`]: a
    ///   line breaks the quantity invariant.
    /// - [`CartError::DuplicateLine`]: two lines share an identity key.
    pub fn with_lines(lines: impl Into<Vec<CartLine>>) -> Result<Self, CartError> {
        let lines = lines.into();
        let mut seen = FxHashSet::default();

        for line in &lines {
            line.validate()?;

            if !seen.insert(line.key()) {
                return Err(CartError::DuplicateLine(line.key()));
            }
        }

        Ok(Self { lines })
    }

    /// The cart's lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Consume the cart, yielding its lines.
    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    /// Find a line by id.
    pub fn line(&self, uuid: CartLineUuid) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.uuid == uuid)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a selection to the cart.
    ///
    /// If a line with the same key exists its quantity grows by the
    /// candidate's quantity; otherwise the candidate is appended. The
    /// candidate's stock ceiling is treated as the freshest one and replaces
    /// the stored line's ceiling on success.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: the candidate quantity is zero.
    /// - [`CartError::StockUnavailable`]: the resulting quantity would exceed
    ///   the stock ceiling. The cart is left unchanged.
    pub fn add_line(&mut self, candidate: CartLine) -> Result<(), CartError> {
        if candidate.quantity < 1 {
            return Err(CartError::InvalidQuantity(candidate.quantity));
        }

        let key = candidate.key();

        if let Some(existing) = self.lines.iter_mut().find(|line| line.key() == key) {
            let requested = existing.quantity.saturating_add(candidate.quantity);

            check_stock(requested, candidate.stock)?;

            existing.quantity = requested;
            existing.stock = candidate.stock;

            return Ok(());
        }

        check_stock(candidate.quantity, candidate.stock)?;

        self.lines.push(candidate);

        Ok(())
    }

    /// Set a line's quantity, clamping it to the line's stock ceiling rather
    /// than rejecting an over-ceiling request.
    ///
    /// Returns the quantity actually stored.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: `quantity` is zero.
    /// - [`CartError::LineNotFound`]: no line has this id.
    /// - [`CartError::StockUnavailable`]: the line is out of stock entirely.
    pub fn update_quantity(
        &mut self,
        uuid: CartLineUuid,
        quantity: u32,
    ) -> Result<u32, CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        let line = self
            .lines
            .iter_mut()
            .find(|line| line.uuid == uuid)
            .ok_or(CartError::LineNotFound(uuid))?;

        let clamped = line.stock.map_or(quantity, |ceiling| quantity.min(ceiling));

        if clamped < 1 {
            return Err(CartError::StockUnavailable {
                requested: quantity,
                available: 0,
            });
        }

        line.quantity = clamped;

        Ok(clamped)
    }

    /// Remove a line, returning it if it was present.
    pub fn remove_line(&mut self, uuid: CartLineUuid) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| line.uuid == uuid)?;

        Some(self.lines.remove(index))
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of quantity times unit price across all lines. A display
    /// aggregate; the authoritative order total is computed at checkout.
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalog::{Color, ProductUuid, Size};

    use super::*;

    fn line(product: ProductUuid, size: Size, quantity: u32, stock: Option<u32>) -> CartLine {
        CartLine {
            uuid: CartLineUuid::new(),
            product,
            name: "Denim Jacket".to_string(),
            image: Some("/images/denim-jacket.jpg".to_string()),
            price: Decimal::new(59_99, 2),
            size,
            color: Color::Blue,
            quantity,
            stock,
        }
    }

    #[test]
    fn adding_new_line_appends_it() -> TestResult {
        let mut cart = Cart::new();
        let candidate = line(ProductUuid::new(), Size::M, 2, Some(5));

        cart.add_line(candidate.clone())?;

        assert_eq!(cart.lines(), &[candidate]);

        Ok(())
    }

    #[test]
    fn adding_existing_key_sums_quantities() -> TestResult {
        let product = ProductUuid::new();
        let mut cart = Cart::with_lines([line(product, Size::M, 2, Some(10))])?;

        cart.add_line(line(product, Size::M, 3, Some(10)))?;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 5);

        Ok(())
    }

    #[test]
    fn adding_past_stock_ceiling_is_rejected_without_mutation() -> TestResult {
        let product = ProductUuid::new();
        let mut cart = Cart::with_lines([line(product, Size::S, 2, Some(6))])?;
        let before = cart.clone();

        let result = cart.add_line(line(product, Size::S, 5, Some(6)));

        assert_eq!(
            result,
            Err(CartError::StockUnavailable {
                requested: 7,
                available: 6
            })
        );
        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn adding_new_line_over_its_own_ceiling_is_rejected() {
        let mut cart = Cart::new();

        let result = cart.add_line(line(ProductUuid::new(), Size::L, 4, Some(3)));

        assert!(
            matches!(result, Err(CartError::StockUnavailable { .. })),
            "expected StockUnavailable, got {result:?}"
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn adding_zero_quantity_is_invalid() {
        let mut cart = Cart::new();

        let result = cart.add_line(line(ProductUuid::new(), Size::L, 0, None));

        assert_eq!(result, Err(CartError::InvalidQuantity(0)));
    }

    #[test]
    fn zero_stock_means_out_of_stock() {
        let mut cart = Cart::new();

        let result = cart.add_line(line(ProductUuid::new(), Size::L, 1, Some(0)));

        assert_eq!(
            result,
            Err(CartError::StockUnavailable {
                requested: 1,
                available: 0
            })
        );
    }

    #[test]
    fn lines_differing_only_by_color_are_distinct() -> TestResult {
        let product = ProductUuid::new();
        let mut cart = Cart::new();

        let blue = line(product, Size::M, 1, None);
        let mut black = line(product, Size::M, 1, None);

        black.color = Color::Black;

        cart.add_line(blue)?;
        cart.add_line(black)?;

        assert_eq!(cart.len(), 2);

        Ok(())
    }

    #[test]
    fn update_quantity_clamps_to_ceiling() -> TestResult {
        let existing = line(ProductUuid::new(), Size::M, 2, Some(6));
        let uuid = existing.uuid;
        let mut cart = Cart::with_lines([existing])?;

        let stored = cart.update_quantity(uuid, 10)?;

        assert_eq!(stored, 6);
        assert_eq!(cart.line(uuid).map(|line| line.quantity), Some(6));

        Ok(())
    }

    #[test]
    fn update_quantity_below_one_is_rejected() -> TestResult {
        let existing = line(ProductUuid::new(), Size::M, 2, None);
        let uuid = existing.uuid;
        let mut cart = Cart::with_lines([existing])?;

        assert_eq!(cart.update_quantity(uuid, 0), Err(CartError::InvalidQuantity(0)));
        assert_eq!(cart.line(uuid).map(|line| line.quantity), Some(2));

        Ok(())
    }

    #[test]
    fn update_quantity_of_missing_line_is_not_found() {
        let mut cart = Cart::new();
        let uuid = CartLineUuid::new();

        assert_eq!(cart.update_quantity(uuid, 1), Err(CartError::LineNotFound(uuid)));
    }

    #[test]
    fn remove_line_is_a_noop_for_unknown_ids() -> TestResult {
        let existing = line(ProductUuid::new(), Size::M, 2, None);
        let uuid = existing.uuid;
        let mut cart = Cart::with_lines([existing])?;

        assert!(cart.remove_line(CartLineUuid::new()).is_none());
        assert_eq!(cart.len(), 1);

        assert!(cart.remove_line(uuid).is_some());
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn totals_sum_quantities_and_prices() -> TestResult {
        let cart = Cart::with_lines([
            line(ProductUuid::new(), Size::S, 2, None),
            line(ProductUuid::new(), Size::M, 1, None),
        ])?;

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), Decimal::new(179_97, 2));

        Ok(())
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let cart = Cart::new();

        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn with_lines_rejects_duplicate_keys() {
        let product = ProductUuid::new();
        let first = line(product, Size::M, 1, None);
        let second = line(product, Size::M, 2, None);
        let key = first.key();

        assert_eq!(
            Cart::with_lines([first, second]),
            Err(CartError::DuplicateLine(key))
        );
    }

    #[test]
    fn clear_empties_the_cart() -> TestResult {
        let mut cart = Cart::with_lines([line(ProductUuid::new(), Size::M, 1, None)])?;

        cart.clear();

        assert!(cart.is_empty());

        Ok(())
    }
}
