//! Errors

use salvo::http::StatusError;
use tracing::error;

use storefront::cart::CartError;
use storefront_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::ProductNotFound(_) => {
            StatusError::not_found().brief("Product not found")
        }
        CartsServiceError::SizeUnavailable(_) | CartsServiceError::ColorUnavailable(_) => {
            StatusError::bad_request().brief(error.to_string())
        }
        CartsServiceError::Cart(source) => match source {
            CartError::StockUnavailable { .. } => StatusError::conflict().brief(source.to_string()),
            CartError::LineNotFound(_) => StatusError::not_found().brief("Cart line not found"),
            CartError::InvalidQuantity(_) | CartError::DuplicateLine(_) => {
                StatusError::bad_request().brief(source.to_string())
            }
        },
        CartsServiceError::Storage(source) => {
            error!("cart storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
