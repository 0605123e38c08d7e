//! Catalog Fixtures
//!
//! The catalog is read from a YAML file at start-up:
//!
//! ```yaml
//! products:
//!   - uuid: 0192a0c4-4c5e-7b6e-9f3a-1d2c3b4a5e6f
//!     name: Linen Shirt
//!     gender: MEN
//!     featured: true
//!     price: "1499.00"
//!     stock: 12
//!     sizes: [S, M, L]
//!     colors: [WHITE, BEIGE]
//! ```

use std::{fs, path::Path};

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use storefront::catalog::{Color, Gender, ProductUuid, Size};
use thiserror::Error;

use crate::domain::products::models::Product;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading the catalog file
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Price is not a non-negative decimal
    #[error("invalid price for {product}: {price}")]
    InvalidPrice {
        /// Product name
        product: String,
        /// Rejected price
        price: String,
    },

    /// A product offers no sizes
    #[error("product {0} offers no sizes")]
    NoSizes(String),

    /// Two products share a UUID
    #[error("duplicate product uuid {0}")]
    DuplicateProduct(ProductUuid),
}

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    pub uuid: ProductUuid,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub featured: bool,

    /// Unit price, e.g. "1499.00"
    pub price: String,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub stock: Option<u32>,

    pub sizes: Vec<Size>,

    #[serde(default)]
    pub colors: Vec<Color>,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let price = parse_price(&fixture.name, &fixture.price)?;

        if fixture.sizes.is_empty() {
            return Err(FixtureError::NoSizes(fixture.name));
        }

        Ok(Product {
            uuid: fixture.uuid,
            name: fixture.name,
            description: fixture.description,
            category: fixture.category,
            gender: fixture.gender,
            featured: fixture.featured,
            price,
            images: fixture.images,
            stock: fixture.stock,
            sizes: fixture.sizes,
            colors: fixture.colors,
        })
    }
}

fn parse_price(product: &str, price: &str) -> Result<Decimal, FixtureError> {
    let invalid = || FixtureError::InvalidPrice {
        product: product.to_string(),
        price: price.to_string(),
    };

    let amount = price.trim().parse::<Decimal>().map_err(|_err| invalid())?;

    if amount.is_sign_negative() {
        return Err(invalid());
    }

    Ok(amount)
}

/// Parse a catalog from YAML.
///
/// # Errors
///
/// Returns an error if the YAML is malformed, a price is invalid, a product
/// offers no sizes, or two products share a UUID.
pub fn parse_catalog(yaml: &str) -> Result<Vec<Product>, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    let mut seen = FxHashSet::default();
    let mut products = Vec::with_capacity(fixture.products.len());

    for product in fixture.products {
        if !seen.insert(product.uuid) {
            return Err(FixtureError::DuplicateProduct(product.uuid));
        }

        products.push(Product::try_from(product)?);
    }

    Ok(products)
}

/// Load a catalog from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or [`parse_catalog`] fails.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Product>, FixtureError> {
    let contents = fs::read_to_string(path)?;

    parse_catalog(&contents)
}
