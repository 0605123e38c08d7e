//! Create Order Handler

use std::{str::FromStr, sync::Arc};

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront::orders::PaymentMethod;
use storefront_app::domain::orders::models::PlaceOrder;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    /// Delivery address
    pub address: Uuid,

    /// `COD`, `CREDIT_CARD`, `UPI` or `PAYPAL`
    pub payment_method: String,
}

impl TryFrom<CreateOrderRequest> for PlaceOrder {
    type Error = StatusError;

    fn try_from(request: CreateOrderRequest) -> Result<Self, Self::Error> {
        Ok(PlaceOrder {
            address: request.address.into(),
            payment_method: PaymentMethod::from_str(&request.payment_method)
                .or_400("invalid payment method")?,
        })
    }
}

/// Create Order Handler
///
/// Checks out the customer's cart into a pending order and empties the cart.
#[endpoint(
    tags("orders"),
    summary = "Place Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty cart or invalid payload"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Sign in required"),
        (status_code = StatusCode::CONFLICT, description = "A product is no longer available"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.customer_or_401()?;

    let request = PlaceOrder::try_from(json.into_inner())?;

    let order = state
        .app
        .orders
        .place_order(user, request)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront::customers::AddressUuid;
    use storefront_app::domain::orders::{MockOrdersService, OrdersServiceError};

    use crate::{
        identity::{SESSION_HEADER, USER_HEADER},
        test_helpers::{TEST_SESSION, TEST_USER, make_order, orders_service},
    };

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders").post(handler))
    }

    #[tokio::test]
    async fn test_place_order_returns_201_with_location() -> TestResult {
        let address = AddressUuid::new();
        let order = make_order(TEST_USER)?;
        let uuid = order.uuid;

        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .withf(move |user, request| {
                *user == TEST_USER
                    && *request
                        == PlaceOrder {
                            address,
                            payment_method: PaymentMethod::Upi,
                        }
            })
            .return_once(move |_, _| Ok(order));

        let mut res = TestClient::post("http://example.com/orders")
            .add_header(USER_HEADER, TEST_USER.to_string(), true)
            .json(&json!({ "address": address.into_uuid(), "payment_method": "upi" }))
            .send(&make_service(orders))
            .await;

        let body: OrderResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/orders/{uuid}").as_str()));
        assert_eq!(body.status, "PENDING");
        assert_eq!(body.payment_status, "PENDING");
        assert_eq!(body.total.parse::<Decimal>()?, Decimal::new(2998, 0));

        Ok(())
    }

    #[tokio::test]
    async fn test_place_order_with_empty_cart_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::EmptyCart));

        let res = TestClient::post("http://example.com/orders")
            .add_header(USER_HEADER, TEST_USER.to_string(), true)
            .json(&json!({ "address": Uuid::now_v7(), "payment_method": "COD" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_place_order_unknown_payment_method_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_place_order().never();

        let res = TestClient::post("http://example.com/orders")
            .add_header(USER_HEADER, TEST_USER.to_string(), true)
            .json(&json!({ "address": Uuid::now_v7(), "payment_method": "BARTER" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_guest_cannot_place_order() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_place_order().never();

        let res = TestClient::post("http://example.com/orders")
            .add_header(SESSION_HEADER, TEST_SESSION.to_string(), true)
            .json(&json!({ "address": Uuid::now_v7(), "payment_method": "COD" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
