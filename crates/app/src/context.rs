//! App Context

use std::{path::Path, sync::Arc};

use storefront::orders::ChargesPolicy;
use thiserror::Error;

use crate::{
    domain::{
        carts::{CartsService, StoreCartsService, store::InMemoryCartStore},
        orders::{OrdersService, StoreOrdersService, repository::InMemoryOrdersRepository},
        products::{
            CatalogProductsService, ProductsService,
            fixtures::{FixtureError, load_catalog},
            models::Product,
            repository::InMemoryProductsRepository,
        },
    },
    notifications::TracingNotifier,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load catalog")]
    Catalog(#[source] FixtureError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context from a catalog fixture file, with in-memory
    /// carts and orders.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be read or parsed.
    pub fn from_catalog_path(
        path: impl AsRef<Path>,
        charges: ChargesPolicy,
    ) -> Result<Self, AppInitError> {
        let catalog = load_catalog(path).map_err(AppInitError::Catalog)?;

        Ok(Self::in_memory(catalog, charges))
    }

    /// Build application context over in-memory stores.
    #[must_use]
    pub fn in_memory(catalog: Vec<Product>, charges: ChargesPolicy) -> Self {
        let products = Arc::new(InMemoryProductsRepository::new(catalog));
        let carts = Arc::new(InMemoryCartStore::new());

        Self {
            products: Arc::new(CatalogProductsService::new(products.clone())),
            carts: Arc::new(StoreCartsService::new(carts.clone(), products.clone())),
            orders: Arc::new(StoreOrdersService::new(
                Arc::new(InMemoryOrdersRepository::new()),
                carts,
                products,
                Arc::new(TracingNotifier),
                charges,
            )),
        }
    }
}
