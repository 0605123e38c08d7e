//! Product Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::models::{Product, ProductPage};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    pub name: String,

    pub description: Option<String>,

    pub category: Option<String>,

    /// Target audience, e.g. `"WOMEN"`
    pub gender: Option<String>,

    pub featured: bool,

    /// Unit price as a decimal string
    pub price: String,

    pub images: Vec<String>,

    /// Units available, absent when stock is not tracked
    pub stock: Option<u32>,

    pub in_stock: bool,

    /// Sizes on offer, e.g. `"M"` or `"FREE_SIZE"`
    pub sizes: Vec<String>,

    /// Colors on offer; empty when any color is accepted
    pub colors: Vec<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            uuid: product.uuid.into(),
            in_stock: product.in_stock(),
            gender: product.gender.map(|gender| gender.to_string()),
            price: product.price.to_string(),
            sizes: product.sizes.iter().map(ToString::to_string).collect(),
            colors: product.colors.iter().map(ToString::to_string).collect(),
            name: product.name,
            description: product.description,
            category: product.category,
            featured: product.featured,
            images: product.images,
            stock: product.stock,
        }
    }
}

/// Pagination block for catalog listings
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaginationResponse {
    /// Products matching the filter across all pages
    pub total: usize,

    /// 1-based page number
    pub page: u32,

    pub limit: u32,

    pub total_pages: usize,
}

impl From<&ProductPage> for PaginationResponse {
    fn from(listing: &ProductPage) -> Self {
        Self {
            total: listing.total,
            page: listing.page.page(),
            limit: listing.page.limit(),
            total_pages: listing.total_pages(),
        }
    }
}
