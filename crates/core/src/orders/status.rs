//! Order status state machine
//!
//! ```text
//! PENDING -> PROCESSING -> SHIPPED -> DELIVERED
//!    |            |
//!    +------------+--> CANCELLED
//! ```
//!
//! `DELIVERED` and `CANCELLED` are terminal.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
    orders::OrderError,
    values::{UnknownValue, WireValue},
};

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Placed, not yet picked up for fulfilment
    Pending,
    /// Being prepared
    Processing,
    /// Handed to the carrier
    Shipped,
    /// Received by the customer
    Delivered,
    /// Cancelled before shipping
    Cancelled,
}

impl OrderStatus {
    /// Position along the forward sequence; `None` for [`OrderStatus::Cancelled`].
    pub fn progress(self) -> Option<u8> {
        match self {
            Self::Pending => Some(0),
            Self::Processing => Some(1),
            Self::Shipped => Some(2),
            Self::Delivered => Some(3),
            Self::Cancelled => None,
        }
    }

    /// No transitions leave a terminal status.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Whether the order may still be cancelled.
    pub fn is_cancellable(self) -> bool {
        matches!(self, Self::Pending | Self::Processing)
    }

    /// Whether `next` is a legal successor of `self`: any forward move along
    /// the sequence, or cancellation before shipping.
    pub fn can_transition_to(self, next: Self) -> bool {
        if next == Self::Cancelled {
            return self.is_cancellable();
        }

        match (self.progress(), next.progress()) {
            (Some(current), Some(target)) => target > current,
            _ => false,
        }
    }

    /// The status a cancellation would produce.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotCancellable`] for shipped, delivered and
    /// already-cancelled orders. Re-cancelling is an error, not a no-op.
    pub fn cancel(self) -> Result<Self, OrderError> {
        if self.is_cancellable() {
            Ok(Self::Cancelled)
        } else {
            Err(OrderError::NotCancellable(self))
        }
    }

    /// The status an administrative update would produce.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidTransition`] when the move is not in the
    /// transition table.
    pub fn advance(self, next: Self) -> Result<Self, OrderError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(OrderError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl WireValue for OrderStatus {
    const KIND: &'static str = "order status";

    const ALL: &'static [Self] = &[
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_wire(s)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    use OrderStatus::{Cancelled, Delivered, Pending, Processing, Shipped};

    #[test]
    fn pending_and_processing_cancel() -> TestResult {
        assert_eq!(Pending.cancel()?, Cancelled);
        assert_eq!(Processing.cancel()?, Cancelled);

        Ok(())
    }

    #[test]
    fn delivered_cannot_cancel() {
        assert_eq!(Delivered.cancel(), Err(OrderError::NotCancellable(Delivered)));
    }

    #[test]
    fn recancelling_is_an_error() {
        assert_eq!(Cancelled.cancel(), Err(OrderError::NotCancellable(Cancelled)));
    }

    #[test]
    fn shipped_cannot_cancel() {
        assert_eq!(Shipped.cancel(), Err(OrderError::NotCancellable(Shipped)));
    }

    #[test]
    fn cancellation_messages_name_the_reason() {
        assert_eq!(
            OrderError::NotCancellable(Delivered).to_string(),
            "cannot cancel a delivered order"
        );
        assert_eq!(
            OrderError::NotCancellable(Cancelled).to_string(),
            "order is already cancelled"
        );
    }

    #[test]
    fn forward_moves_are_allowed_including_skips() -> TestResult {
        assert_eq!(Pending.advance(Processing)?, Processing);
        assert_eq!(Processing.advance(Shipped)?, Shipped);
        assert_eq!(Shipped.advance(Delivered)?, Delivered);
        assert_eq!(Pending.advance(Shipped)?, Shipped);

        Ok(())
    }

    #[test]
    fn backward_and_self_moves_are_rejected() {
        assert_eq!(
            Shipped.advance(Processing),
            Err(OrderError::InvalidTransition {
                from: Shipped,
                to: Processing
            })
        );
        assert!(Pending.advance(Pending).is_err());
    }

    #[test]
    fn terminal_statuses_admit_nothing() {
        for next in OrderStatus::ALL {
            assert!(
                !Delivered.can_transition_to(*next),
                "delivered -> {next} should be rejected"
            );
            assert!(
                !Cancelled.can_transition_to(*next),
                "cancelled -> {next} should be rejected"
            );
        }
    }

    #[test]
    fn advance_to_cancelled_follows_cancel_rules() {
        assert!(Processing.advance(Cancelled).is_ok());
        assert!(Shipped.advance(Cancelled).is_err());
    }

    #[test]
    fn statuses_parse_from_wire_names() -> TestResult {
        assert_eq!("shipped".parse::<OrderStatus>()?, Shipped);
        assert!("LOST".parse::<OrderStatus>().is_err());

        Ok(())
    }
}
