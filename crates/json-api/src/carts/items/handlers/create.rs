//! Create Cart Item Handler

use std::{str::FromStr, sync::Arc};

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront::catalog::{Color, Size};
use storefront_app::domain::carts::models::NewCartItem;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

const fn default_quantity() -> u32 {
    1
}

/// Create Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartItemRequest {
    pub product: Uuid,

    /// e.g. `"M"` or `"FREE_SIZE"`
    pub size: String,

    /// Defaults to `"BLACK"` when absent
    pub color: Option<String>,

    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl TryFrom<CreateCartItemRequest> for NewCartItem {
    type Error = StatusError;

    fn try_from(request: CreateCartItemRequest) -> Result<Self, Self::Error> {
        Ok(NewCartItem {
            product: request.product.into(),
            size: Size::from_str(&request.size).or_400("invalid size")?,
            color: request
                .color
                .as_deref()
                .map(Color::from_str)
                .transpose()
                .or_400("invalid color")?
                .unwrap_or_default(),
            quantity: request.quantity,
        })
    }
}

/// Create Cart Item Handler
///
/// Adds a product selection to the caller's cart, merging into an existing
/// line for the same product, size and color.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "No customer or guest session"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Not enough stock"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = depot.cart_owner_or_401()?;

    let item = NewCartItem::try_from(json.into_inner())?;
    let (product, size, color) = (item.product, item.size, item.color);

    let cart = state
        .app
        .carts
        .add_item(owner, item)
        .await
        .map_err(into_status_error)?;

    let line = cart
        .lines()
        .iter()
        .find(|line| line.product == product && line.size == size && line.color == color)
        .map(|line| line.uuid)
        .ok_or("added line missing from cart")
        .or_500("failed to locate added line")?;

    res.add_header(LOCATION, format!("/cart/items/{line}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(cart.into()))
}
