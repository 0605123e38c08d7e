//! Product Models

use rust_decimal::Decimal;
use storefront::catalog::{Color, Gender, ProductUuid, Size};

/// Default number of products per catalog page.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Largest page a caller may ask for.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub gender: Option<Gender>,
    pub featured: bool,
    pub price: Decimal,
    pub images: Vec<String>,

    /// Maximum purchasable quantity; `None` when unbounded.
    pub stock: Option<u32>,

    pub sizes: Vec<Size>,

    /// Colors on offer. Empty means the product comes in a single,
    /// unspecified color and any color is accepted.
    pub colors: Vec<Color>,
}

impl Product {
    /// Image shown on cart lines.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn offers_size(&self, size: Size) -> bool {
        self.sizes.contains(&size)
    }

    pub fn offers_color(&self, color: Color) -> bool {
        self.colors.is_empty() || self.colors.contains(&color)
    }

    pub fn in_stock(&self) -> bool {
        self.stock != Some(0)
    }
}

/// Catalog listing filter. Unset fields match every product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Category name, compared without regard to ASCII case.
    pub category: Option<String>,
    pub gender: Option<Gender>,
    pub featured_only: bool,
    pub in_stock_only: bool,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let category = self.category.as_deref().is_none_or(|wanted| {
            product
                .category
                .as_deref()
                .is_some_and(|category| category.eq_ignore_ascii_case(wanted))
        });

        let gender = self.gender.is_none_or(|wanted| product.gender == Some(wanted));

        category
            && gender
            && (!self.featured_only || product.featured)
            && (!self.in_stock_only || product.in_stock())
    }
}

/// A 1-based page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Page numbers below 1 become 1; limits are kept within
    /// `1..=MAX_PAGE_LIMIT`.
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_LIMIT),
        }
    }

    pub fn page(self) -> u32 {
        self.page
    }

    pub fn limit(self) -> u32 {
        self.limit
    }

    /// Number of items before this page.
    pub fn offset(self) -> usize {
        (self.page as usize - 1).saturating_mul(self.limit as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_LIMIT)
    }
}

/// One page of catalog products plus the size of the whole filtered listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: usize,
    pub page: PageRequest,
}

impl ProductPage {
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page.limit() as usize)
    }
}
