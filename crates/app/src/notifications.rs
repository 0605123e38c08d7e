//! Order notifications
//!
//! Sent after an order write has succeeded. Delivery failures are logged by
//! the caller and never undo the write.

use async_trait::async_trait;
use mockall::automock;
use storefront::orders::{Order, OrderStatus};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
#[error("notification failed: {0}")]
pub struct NotifyError(pub String);

#[automock]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// A new order was placed.
    async fn order_placed(&self, order: &Order) -> Result<(), NotifyError>;

    /// An order's status changed from `previous` to its current status.
    async fn order_status_changed(
        &self,
        order: &Order,
        previous: OrderStatus,
    ) -> Result<(), NotifyError>;
}

/// Emits each notification as a structured log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn order_placed(&self, order: &Order) -> Result<(), NotifyError> {
        info!(
            order_uuid = %order.uuid,
            order_number = %order.number,
            user_uuid = %order.user,
            total = %order.totals.total(),
            "order placed"
        );

        Ok(())
    }

    async fn order_status_changed(
        &self,
        order: &Order,
        previous: OrderStatus,
    ) -> Result<(), NotifyError> {
        info!(
            order_uuid = %order.uuid,
            order_number = %order.number,
            from = %previous,
            to = %order.status,
            "order status changed"
        );

        Ok(())
    }
}
