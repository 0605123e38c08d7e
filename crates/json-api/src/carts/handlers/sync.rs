//! Sync Cart Handler

use std::{str::FromStr, sync::Arc};

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront::{
    cart::{CartLine, CartLineUuid},
    catalog::{Color, Size},
};

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// A line persisted on the client. Name, image, price and stock are taken
/// from the catalog, so only the selection travels.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SyncCartLine {
    /// Client-side line id; a fresh one is assigned when absent or already
    /// used by another line
    pub uuid: Option<Uuid>,

    pub product: Uuid,

    pub size: String,

    /// Defaults to `"BLACK"` when absent
    pub color: Option<String>,

    pub quantity: u32,
}

impl TryFrom<SyncCartLine> for CartLine {
    type Error = StatusError;

    fn try_from(line: SyncCartLine) -> Result<Self, Self::Error> {
        Ok(CartLine {
            uuid: line.uuid.map_or_else(CartLineUuid::new, Into::into),
            product: line.product.into(),
            name: String::new(),
            image: None,
            price: Decimal::ZERO,
            size: Size::from_str(&line.size).or_400("invalid size")?,
            color: line
                .color
                .as_deref()
                .map(Color::from_str)
                .transpose()
                .or_400("invalid color")?
                .unwrap_or_default(),
            quantity: line.quantity,
            stock: None,
        })
    }
}

/// Sync Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SyncCartRequest {
    pub lines: Vec<SyncCartLine>,
}

/// Sync Cart Handler
///
/// Reconciles lines the client kept locally with the stored cart. For lines
/// present on both sides the client's quantity wins, clamped to stock, while
/// the stored line keeps its id. Client-only lines are appended. Lines for
/// unknown or out of stock products, or for a size or color the product no
/// longer offers, are dropped.
#[endpoint(
    tags("carts"),
    summary = "Sync Cart",
    responses(
        (status_code = StatusCode::OK, description = "Reconciled cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "No customer or guest session"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SyncCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = depot.cart_owner_or_401()?;

    let lines = json
        .into_inner()
        .lines
        .into_iter()
        .map(CartLine::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let cart = state
        .app
        .carts
        .sync_cart(owner, lines)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
