//! Order Models

use storefront::{
    customers::AddressUuid,
    orders::{Order, PaymentMethod, StepProgress},
};

/// Checkout request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceOrder {
    pub address: AddressUuid,
    pub payment_method: PaymentMethod,
}

/// An order together with its derived tracking steps.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTracking {
    pub order: Order,
    pub steps: [StepProgress; 4],
}

impl From<Order> for OrderTracking {
    fn from(order: Order) -> Self {
        Self {
            steps: order.tracking(),
            order,
        }
    }
}
