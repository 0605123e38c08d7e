//! Cart Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use storefront::{
    catalog::{Color, ProductUuid, Size},
    customers::{SessionUuid, UserUuid},
};

/// Who a stored cart belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartOwner {
    /// Anonymous browsing session
    Guest(SessionUuid),

    /// Signed-in customer
    Customer(UserUuid),
}

impl Display for CartOwner {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Guest(session) => write!(f, "guest:{session}"),
            Self::Customer(user) => write!(f, "customer:{user}"),
        }
    }
}

/// New Cart Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub product: ProductUuid,
    pub size: Size,
    pub color: Color,
    pub quantity: u32,
}
