//! Merge Guest Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Merge Guest Cart Handler
///
/// Folds the guest session's cart into the signed-in customer's cart and
/// discards the guest cart. Requires both identity headers.
#[endpoint(
    tags("carts"),
    summary = "Merge Guest Cart",
    responses(
        (status_code = StatusCode::OK, description = "Merged cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing guest session"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Sign in required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.customer_or_401()?;
    let session = depot.guest_session_or_400()?;

    let cart = state
        .app
        .carts
        .merge_guest_cart(session, user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
