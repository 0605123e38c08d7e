//! Order errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::orders::OrderStatus;

/// Errors raised by the order lifecycle. A failed transition leaves the
/// order's status untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Only pending or processing orders can be cancelled.
    #[error("{}", not_cancellable_message(.0))]
    NotCancellable(OrderStatus),

    /// The status change is not allowed by the lifecycle.
    #[error("cannot move an order from {from} to {to}")]
    InvalidTransition {
        /// Current status
        from: OrderStatus,
        /// Requested status
        to: OrderStatus,
    },

    /// Totals do not satisfy `total = subtotal + tax + shipping - discount`.
    #[error("order total {actual} does not match computed total {expected}")]
    TotalsMismatch {
        /// Total computed from the components
        expected: Decimal,
        /// Total that was supplied
        actual: Decimal,
    },

    /// Orders must contain at least one line.
    #[error("an order needs at least one line")]
    NoLines,
}

fn not_cancellable_message(status: &OrderStatus) -> String {
    match status {
        OrderStatus::Delivered => "cannot cancel a delivered order".to_string(),
        OrderStatus::Cancelled => "order is already cancelled".to_string(),
        other => format!("cannot cancel an order that is {other}"),
    }
}
