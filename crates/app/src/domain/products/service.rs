//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use storefront::catalog::ProductUuid;

use crate::domain::products::{
    errors::ProductsServiceError,
    models::{PageRequest, Product, ProductFilter, ProductPage},
    repository::ProductsRepository,
};

#[derive(Clone)]
pub struct CatalogProductsService {
    repository: Arc<dyn ProductsRepository>,
}

impl CatalogProductsService {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductsService for CatalogProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
        page: PageRequest,
    ) -> Result<ProductPage, ProductsServiceError> {
        let matching: Vec<Product> = self
            .repository
            .list()
            .await?
            .into_iter()
            .filter(|product| filter.matches(product))
            .collect();

        let total = matching.len();

        let products = matching
            .into_iter()
            .skip(page.offset())
            .take(page.limit() as usize)
            .collect();

        Ok(ProductPage {
            products,
            total,
            page,
        })
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        self.repository
            .find(product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// One page of the catalog products matching `filter`, in catalog order.
    async fn list_products(
        &self,
        filter: ProductFilter,
        page: PageRequest,
    ) -> Result<ProductPage, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;
}
