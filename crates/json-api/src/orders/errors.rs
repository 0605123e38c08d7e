//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use storefront::orders::OrderError;
use storefront_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::EmptyCart => StatusError::bad_request().brief("Cart is empty"),
        OrdersServiceError::ProductUnavailable(_) | OrdersServiceError::StatusContention => {
            StatusError::conflict().brief(error.to_string())
        }
        OrdersServiceError::Order(source) => match source {
            OrderError::NotCancellable(_) => StatusError::bad_request().brief(source.to_string()),
            OrderError::InvalidTransition { .. } => {
                StatusError::conflict().brief(source.to_string())
            }
            OrderError::TotalsMismatch { .. } | OrderError::NoLines => {
                error!("order could not be built: {source}");

                StatusError::internal_server_error()
            }
        },
        OrdersServiceError::Storage(source) => {
            error!("order storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
