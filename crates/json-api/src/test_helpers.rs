//! Test helpers.

use std::{error::Error, sync::Arc};

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use storefront::{
    cart::{Cart, CartLine, CartLineUuid},
    catalog::{Color, Gender, ProductUuid, Size},
    customers::{AddressUuid, SessionUuid, UserUuid},
    orders::{ChargesPolicy, Order, OrderDraft, PaymentMethod},
};
use storefront_app::{
    context::AppContext,
    domain::{
        carts::MockCartsService,
        orders::MockOrdersService,
        products::{MockProductsService, models::Product},
    },
};

use crate::{identity, state::State};

pub(crate) const TEST_USER: UserUuid = UserUuid::from_uuid(Uuid::from_u128(1));
pub(crate) const TEST_SESSION: SessionUuid = SessionUuid::from_uuid(Uuid::from_u128(2));
pub(crate) const TEST_ADMIN_TOKEN: &str = "test-admin-token";

pub(crate) fn make_product(uuid: ProductUuid) -> Product {
    Product {
        uuid,
        name: "Linen Shirt".to_string(),
        description: Some("Relaxed fit".to_string()),
        category: Some("shirts".to_string()),
        gender: Some(Gender::Men),
        featured: true,
        price: Decimal::new(1499, 0),
        images: vec!["/img/linen-shirt.jpg".to_string()],
        stock: Some(12),
        sizes: vec![Size::S, Size::M, Size::L],
        colors: vec![Color::White, Color::Beige],
    }
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();

    products
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_update_quantity().never();
    carts.expect_remove_item().never();
    carts.expect_clear_cart().never();
    carts.expect_sync_cart().never();
    carts.expect_merge_guest_cart().never();

    carts
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_place_order().never();
    orders.expect_get_order().never();
    orders.expect_list_orders().never();
    orders.expect_cancel_order().never();
    orders.expect_update_status().never();
    orders.expect_tracking().never();

    orders
}

fn state(
    products: MockProductsService,
    carts: MockCartsService,
    orders: MockOrdersService,
    admin_token: Option<&str>,
) -> Arc<State> {
    let app = AppContext {
        products: Arc::new(products),
        carts: Arc::new(carts),
        orders: Arc::new(orders),
    };

    State::from_app_context(app, admin_token.map(str::to_string))
}

pub(crate) fn state_with_admin_token(admin_token: Option<&str>) -> Arc<State> {
    state(
        strict_products_mock(),
        strict_carts_mock(),
        strict_orders_mock(),
        admin_token,
    )
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    state(products, strict_carts_mock(), strict_orders_mock(), None)
}

fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(identity::middleware::handler)
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(state_with_products(products), route)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service(
        state(strict_products_mock(), carts, strict_orders_mock(), None),
        route,
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service(
        state(
            strict_products_mock(),
            strict_carts_mock(),
            orders,
            Some(TEST_ADMIN_TOKEN),
        ),
        route,
    )
}

pub(crate) fn make_line(product: ProductUuid, quantity: u32) -> CartLine {
    CartLine {
        uuid: CartLineUuid::new(),
        product,
        name: "Linen Shirt".to_string(),
        image: Some("/img/linen-shirt.jpg".to_string()),
        price: Decimal::new(1499, 0),
        size: Size::M,
        color: Color::White,
        quantity,
        stock: Some(12),
    }
}

pub(crate) fn make_order(user: UserUuid) -> Result<Order, Box<dyn Error>> {
    let cart = Cart::with_lines(vec![make_line(ProductUuid::new(), 2)])?;

    let draft = OrderDraft::from_cart(
        user,
        &cart,
        AddressUuid::new(),
        PaymentMethod::Cod,
        &ChargesPolicy::default(),
    )?;

    Ok(Order::place(draft, Timestamp::now())?)
}
