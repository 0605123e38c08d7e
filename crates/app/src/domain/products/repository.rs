//! Products Repository

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use storefront::catalog::ProductUuid;

use crate::{domain::products::models::Product, storage::StorageError};

#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// All products, in catalog order.
    async fn list(&self) -> Result<Vec<Product>, StorageError>;

    /// A single product, if it exists.
    async fn find(&self, product: ProductUuid) -> Result<Option<Product>, StorageError>;
}

/// Read-only catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductsRepository {
    order: Vec<ProductUuid>,
    products: FxHashMap<ProductUuid, Product>,
}

impl InMemoryProductsRepository {
    #[must_use]
    pub fn new(catalog: impl IntoIterator<Item = Product>) -> Self {
        let mut repository = Self::default();

        for product in catalog {
            let uuid = product.uuid;

            if repository.products.insert(uuid, product).is_none() {
                repository.order.push(uuid);
            }
        }

        repository
    }
}

#[async_trait]
impl ProductsRepository for InMemoryProductsRepository {
    async fn list(&self) -> Result<Vec<Product>, StorageError> {
        Ok(self
            .order
            .iter()
            .filter_map(|uuid| self.products.get(uuid))
            .cloned()
            .collect())
    }

    async fn find(&self, product: ProductUuid) -> Result<Option<Product>, StorageError> {
        Ok(self.products.get(&product).cloned())
    }
}
