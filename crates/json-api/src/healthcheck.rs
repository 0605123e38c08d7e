//! Storefront JSON API Healthcheck Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::error;

use storefront_app::domain::products::models::{PageRequest, ProductFilter};

use crate::{extensions::*, state::State};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Number of products in the loaded catalog
    pub catalog_products: usize,
}

/// Healthcheck handler
///
/// Reports the service as healthy once the catalog can be read.
#[endpoint(
    tags("health"),
    summary = "Health check endpoint",
    responses(
        (status_code = StatusCode::OK, description = "Service is healthy"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Catalog unavailable"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let listing = state
        .app
        .products
        .list_products(ProductFilter::default(), PageRequest::new(1, 1))
        .await
        .map_err(|source| {
            error!("healthcheck could not read the catalog: {source}");

            StatusError::service_unavailable().brief("Catalog unavailable")
        })?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        catalog_products: listing.total,
    }))
}
