//! Cart lines

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    cart::CartError,
    catalog::{Color, ProductUuid, Size},
    uuids::TypedUuid,
};

/// Cart Line UUID
pub type CartLineUuid = TypedUuid<CartLine>;

/// Identity of a line within a cart. At most one line per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineKey {
    /// Product
    pub product: ProductUuid,
    /// Chosen size
    pub size: Size,
    /// Chosen color
    pub color: Color,
}

/// One product/size/color selection in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub uuid: CartLineUuid,
    pub product: ProductUuid,
    pub name: String,
    pub image: Option<String>,
    pub price: Decimal,
    pub size: Size,
    #[serde(default)]
    pub color: Color,
    pub quantity: u32,

    /// Maximum purchasable quantity; `None` when unbounded.
    pub stock: Option<u32>,
}

impl CartLine {
    /// The line's identity key.
    pub fn key(&self) -> LineKey {
        LineKey {
            product: self.product,
            size: self.size,
            color: self.color,
        }
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Check the line invariant: at least one unit, and no more than the
    /// stock ceiling when one is known.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: the quantity is zero.
    /// - [`CartError::StockUnavailable`]: the quantity exceeds the ceiling.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.quantity < 1 {
            return Err(CartError::InvalidQuantity(self.quantity));
        }

        check_stock(self.quantity, self.stock)
    }
}

pub(super) fn check_stock(requested: u32, stock: Option<u32>) -> Result<(), CartError> {
    match stock {
        Some(available) if requested > available => Err(CartError::StockUnavailable {
            requested,
            available,
        }),
        _ => Ok(()),
    }
}
