//! Order Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront::orders::{Order, OrderLine, StepProgress};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// Human-facing order number, e.g. `ORD-123456A1B2C3`
    pub number: String,

    /// `PENDING`, `PROCESSING`, `SHIPPED`, `DELIVERED` or `CANCELLED`
    pub status: String,

    pub payment_method: String,

    pub payment_status: String,

    pub address: Uuid,

    pub lines: Vec<OrderLineResponse>,

    pub total_items: u64,

    pub subtotal: String,

    pub tax: String,

    pub shipping: String,

    pub discount: String,

    pub total: String,

    pub tracking_number: Option<String>,

    /// Calendar date, e.g. `2026-10-24`
    pub estimated_delivery: Option<String>,

    /// The date and time the order was placed
    pub created_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            uuid: order.uuid.into(),
            number: order.number.to_string(),
            status: order.status.to_string(),
            payment_method: order.payment_method.to_string(),
            payment_status: order.payment_status.to_string(),
            address: order.address.into(),
            total_items: order.total_items(),
            subtotal: order.totals.subtotal().to_string(),
            tax: order.totals.tax().to_string(),
            shipping: order.totals.shipping().to_string(),
            discount: order.totals.discount().to_string(),
            total: order.totals.total().to_string(),
            estimated_delivery: order.estimated_delivery.map(|date| date.to_string()),
            created_at: order.created_at.to_string(),
            tracking_number: order.tracking_number,
            lines: order.lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// Order Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineResponse {
    pub product: Uuid,

    pub name: String,

    pub image: Option<String>,

    pub size: String,

    pub color: String,

    pub quantity: u32,

    /// Unit price at purchase time
    pub price: String,

    pub subtotal: String,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(line: OrderLine) -> Self {
        Self {
            product: line.product.into(),
            size: line.size.to_string(),
            color: line.color.to_string(),
            price: line.price.to_string(),
            subtotal: line.subtotal().to_string(),
            quantity: line.quantity,
            name: line.name,
            image: line.image,
        }
    }
}

/// Tracking Step Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TrackingStepResponse {
    /// `placed`, `processing`, `shipped` or `delivered`
    pub step: String,

    /// `completed`, `upcoming` or `cancelled`
    pub state: String,
}

impl From<StepProgress> for TrackingStepResponse {
    fn from(progress: StepProgress) -> Self {
        Self {
            step: progress.step.as_str().to_string(),
            state: progress.state.as_str().to_string(),
        }
    }
}
