//! Product Index Handler

use std::{str::FromStr, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::catalog::Gender;
use storefront_app::domain::products::models::{DEFAULT_PAGE_LIMIT, PageRequest, ProductFilter};

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{PaginationResponse, ProductResponse},
    },
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The requested page of products
    pub products: Vec<ProductResponse>,

    pub pagination: PaginationResponse,
}

/// Product Index Handler
///
/// Returns one page of the catalog in display order. Out of stock products
/// are hidden unless `in_stock=false` is passed.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Catalog products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid filter"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    gender: QueryParam<String, false>,
    featured: QueryParam<bool, false>,
    in_stock: QueryParam<bool, false>,
    page: QueryParam<u32, false>,
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let gender = gender
        .into_inner()
        .as_deref()
        .map(Gender::from_str)
        .transpose()
        .or_400("invalid \"gender\" query parameter")?;

    let filter = ProductFilter {
        category: category.into_inner().filter(|category| !category.is_empty()),
        gender,
        featured_only: featured.into_inner().unwrap_or(false),
        in_stock_only: in_stock.into_inner().unwrap_or(true),
    };

    let page = PageRequest::new(
        page.into_inner().unwrap_or(1),
        limit.into_inner().unwrap_or(DEFAULT_PAGE_LIMIT),
    );

    let listing = state
        .app
        .products
        .list_products(filter, page)
        .await
        .map_err(into_status_error)?;

    let pagination = PaginationResponse::from(&listing);

    Ok(Json(ProductsResponse {
        products: listing.products.into_iter().map(Into::into).collect(),
        pagination,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront::catalog::ProductUuid;
    use storefront_app::{
        domain::products::{MockProductsService, ProductsServiceError, models::ProductPage},
        storage::StorageError,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_products_in_order() -> TestResult {
        let first = ProductUuid::new();
        let second = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|filter, page| {
                *filter
                    == ProductFilter {
                        in_stock_only: true,
                        ..ProductFilter::default()
                    }
                    && *page == PageRequest::default()
            })
            .return_once(move |_, page| {
                Ok(ProductPage {
                    products: vec![make_product(first), make_product(second)],
                    total: 2,
                    page,
                })
            });

        let response: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        let uuids: Vec<_> = response.products.iter().map(|p| p.uuid).collect();

        assert_eq!(uuids, [first.into_uuid(), second.into_uuid()]);
        assert_eq!(response.pagination.total, 2);
        assert_eq!(response.pagination.page, 1);
        assert_eq!(response.pagination.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(response.pagination.total_pages, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_passes_filter_and_page_from_query() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|filter, page| {
                *filter
                    == ProductFilter {
                        category: Some("shirts".to_string()),
                        gender: Some(Gender::Women),
                        featured_only: true,
                        in_stock_only: false,
                    }
                    && *page == PageRequest::new(3, 5)
            })
            .return_once(|_, page| {
                Ok(ProductPage {
                    products: Vec::new(),
                    total: 11,
                    page,
                })
            });

        let response: ProductsResponse = TestClient::get(
            "http://example.com/products?category=shirts&gender=women&featured=true&in_stock=false&page=3&limit=5",
        )
        .send(&make_service(products))
        .await
        .take_json()
        .await?;

        assert!(response.products.is_empty());
        assert_eq!(response.pagination.page, 3);
        assert_eq!(response.pagination.limit, 5);
        assert_eq!(response.pagination.total_pages, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unknown_gender_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/products?gender=aliens")
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_renders_wire_values() -> TestResult {
        let uuid = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(move |_, page| {
                Ok(ProductPage {
                    products: vec![make_product(uuid)],
                    total: 1,
                    page,
                })
            });

        let response: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        let product = response.products.first().ok_or("expected a product")?;

        assert_eq!(product.price, "1499");
        assert_eq!(product.sizes, ["S", "M", "L"]);
        assert_eq!(product.colors, ["WHITE", "BEIGE"]);
        assert_eq!(product.gender.as_deref(), Some("MEN"));
        assert!(product.featured);
        assert!(product.in_stock);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_list_products().once().return_once(|_, _| {
            Err(ProductsServiceError::Storage(StorageError::Unavailable(
                "catalog offline".to_string(),
            )))
        });

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
