//! Carts service errors.

use storefront::{
    cart::CartError,
    catalog::{Color, ProductUuid, Size},
};
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("product not found")]
    ProductNotFound(ProductUuid),

    #[error("size {0} is not available for this product")]
    SizeUnavailable(Size),

    #[error("color {0} is not available for this product")]
    ColorUnavailable(Color),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("storage error")]
    Storage(#[from] StorageError),
}
