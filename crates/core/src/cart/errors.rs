//! Cart errors

use thiserror::Error;

use crate::cart::{CartLineUuid, LineKey};

/// Errors raised by cart mutations. A failed mutation leaves the cart untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// The requested quantity exceeds the known stock ceiling.
    #[error("requested quantity {requested} is unavailable, only {available} in stock")]
    StockUnavailable {
        /// Quantity the line would have held after the change
        requested: u32,
        /// Stock ceiling for the line
        available: u32,
    },

    /// Quantities must be at least one.
    #[error("invalid quantity {0}, must be at least 1")]
    InvalidQuantity(u32),

    /// No line with this id exists in the cart.
    #[error("cart line {0} not found")]
    LineNotFound(CartLineUuid),

    /// Two lines were supplied for the same product, size and color.
    #[error("duplicate cart line for product {} ({}, {})", .0.product, .0.size, .0.color)]
    DuplicateLine(LineKey),
}
