//! Orders service errors.

use storefront::{catalog::ProductUuid, orders::OrderError};
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("cart is empty")]
    EmptyCart,

    #[error("product {0} is no longer available")]
    ProductUnavailable(ProductUuid),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("order status changed concurrently, retry the request")]
    StatusContention,

    #[error("storage error")]
    Storage(#[from] StorageError),
}
