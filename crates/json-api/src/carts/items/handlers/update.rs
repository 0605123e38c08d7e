//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// Requested quantity; lowered to the available stock when it exceeds it
    pub quantity: u32,
}

/// Update Cart Item Handler
#[endpoint(
    tags("carts"),
    summary = "Update Cart Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "No customer or guest session"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart line not found"),
        (status_code = StatusCode::CONFLICT, description = "Out of stock"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    line: PathParam<Uuid>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = depot.cart_owner_or_401()?;

    let cart = state
        .app
        .carts
        .update_quantity(owner, line.into_inner().into(), json.into_inner().quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront::{
        cart::{Cart, CartError, CartLineUuid},
        catalog::ProductUuid,
    };
    use storefront_app::domain::carts::{MockCartsService, models::CartOwner};

    use crate::{
        identity::USER_HEADER,
        test_helpers::{TEST_USER, carts_service, make_line},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/items/{line}").put(handler))
    }

    #[tokio::test]
    async fn test_update_returns_clamped_cart() -> TestResult {
        let line = make_line(ProductUuid::new(), 12);
        let uuid = line.uuid;
        let cart = Cart::with_lines(vec![line])?;

        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .withf(move |owner, line, quantity| {
                *owner == CartOwner::Customer(TEST_USER) && *line == uuid && *quantity == 40
            })
            .return_once(move |_, _, _| Ok(cart));

        let body: CartResponse = TestClient::put(format!("http://example.com/cart/items/{uuid}"))
            .add_header(USER_HEADER, TEST_USER.to_string(), true)
            .json(&json!({ "quantity": 40 }))
            .send(&make_service(carts))
            .await
            .take_json()
            .await?;

        let stored = body.lines.first().ok_or("expected a line")?;

        assert_eq!(stored.quantity, 12);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_line_returns_404() -> TestResult {
        let uuid = CartLineUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .return_once(move |_, _, _| Err(CartError::LineNotFound(uuid).into()));

        let res = TestClient::put(format!("http://example.com/cart/items/{uuid}"))
            .add_header(USER_HEADER, TEST_USER.to_string(), true)
            .json(&json!({ "quantity": 2 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_to_zero_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .return_once(|_, _, _| Err(CartError::InvalidQuantity(0).into()));

        let res = TestClient::put(format!("http://example.com/cart/items/{}", CartLineUuid::new()))
            .add_header(USER_HEADER, TEST_USER.to_string(), true)
            .json(&json!({ "quantity": 0 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
