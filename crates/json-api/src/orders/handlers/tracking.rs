//! Order Tracking Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::models::OrderTracking;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::TrackingStepResponse},
    state::State,
};

/// Order Tracking Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TrackingResponse {
    pub order: Uuid,

    pub number: String,

    pub status: String,

    pub tracking_number: Option<String>,

    pub estimated_delivery: Option<String>,

    /// Placed, processing, shipped and delivered, in that order
    pub steps: Vec<TrackingStepResponse>,
}

impl From<OrderTracking> for TrackingResponse {
    fn from(tracking: OrderTracking) -> Self {
        let order = tracking.order;

        Self {
            order: order.uuid.into(),
            number: order.number.to_string(),
            status: order.status.to_string(),
            estimated_delivery: order.estimated_delivery.map(|date| date.to_string()),
            tracking_number: order.tracking_number,
            steps: tracking.steps.into_iter().map(Into::into).collect(),
        }
    }
}

/// Order Tracking Handler
///
/// Returns the four-step progress view for one of the customer's orders.
#[endpoint(
    tags("orders"),
    summary = "Track Order",
    responses(
        (status_code = StatusCode::OK, description = "Tracking steps"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Sign in required"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<TrackingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.customer_or_401()?;

    let tracking = state
        .app
        .orders
        .tracking(user, order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(tracking.into()))
}
