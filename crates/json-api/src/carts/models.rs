//! Cart Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront::cart::{Cart, CartLine};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Lines in display order
    pub lines: Vec<CartLineResponse>,

    /// Sum of line quantities
    pub total_items: u64,

    /// Sum of line subtotals as a decimal string
    pub total_price: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            total_items: cart.total_items(),
            total_price: cart.total_price().to_string(),
            lines: cart
                .into_lines()
                .into_iter()
                .map(CartLineResponse::from)
                .collect(),
        }
    }
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The unique identifier of the cart line
    pub uuid: Uuid,

    /// The product in the line
    pub product: Uuid,

    pub name: String,

    pub image: Option<String>,

    /// Unit price as a decimal string
    pub price: String,

    pub size: String,

    pub color: String,

    pub quantity: u32,

    /// Purchasable ceiling, absent when unbounded
    pub stock: Option<u32>,

    /// Unit price times quantity as a decimal string
    pub subtotal: String,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            uuid: line.uuid.into(),
            product: line.product.into(),
            price: line.price.to_string(),
            size: line.size.to_string(),
            color: line.color.to_string(),
            subtotal: line.subtotal().to_string(),
            quantity: line.quantity,
            stock: line.stock,
            name: line.name,
            image: line.image,
        }
    }
}
