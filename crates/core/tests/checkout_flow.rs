//! Cart to order flow

use jiff::Timestamp;
use rust_decimal::Decimal;
use storefront::{
    cart::{Cart, CartError, CartLine, CartLineUuid, reconcile},
    catalog::{Color, ProductUuid, Size},
    customers::{AddressUuid, UserUuid},
    orders::{
        ChargesPolicy, Order, OrderDraft, OrderError, OrderStatus, PaymentMethod, StepState,
        parse_tax_rate,
    },
};
use testresult::TestResult;

fn line(product: ProductUuid, size: Size, quantity: u32, stock: Option<u32>) -> CartLine {
    CartLine {
        uuid: CartLineUuid::new(),
        product,
        name: "Cotton Tee".to_string(),
        image: None,
        price: Decimal::new(499, 0),
        size,
        color: Color::Black,
        quantity,
        stock,
    }
}

#[test]
fn guest_cart_survives_login_and_checks_out() -> TestResult {
    let tee = ProductUuid::new();
    let socks = ProductUuid::new();

    // Guest browsing session
    let mut local = Cart::new();
    local.add_line(line(tee, Size::M, 2, Some(5)))?;
    local.add_line(line(socks, Size::FreeSize, 1, None))?;

    // Cart left behind on a previous visit
    let server = Cart::with_lines(vec![line(tee, Size::M, 1, Some(3))])?;

    let merged = reconcile(local, server);

    assert_eq!(merged.len(), 2);
    assert_eq!(merged.total_items(), 3);

    let policy = ChargesPolicy {
        tax_rate: parse_tax_rate("18%")?,
        shipping_fee: Decimal::new(100, 0),
        free_shipping_threshold: None,
    };

    let draft = OrderDraft::from_cart(
        UserUuid::new(),
        &merged,
        AddressUuid::new(),
        PaymentMethod::Upi,
        &policy,
    )?;
    let order = Order::place(draft, Timestamp::now())?;
    let totals = order.totals;

    assert_eq!(totals.subtotal(), merged.total_price());
    assert_eq!(
        totals.total(),
        totals.subtotal() + totals.tax() + totals.shipping() - totals.discount()
    );

    Ok(())
}

#[test]
fn adding_past_the_ceiling_never_changes_the_cart() -> TestResult {
    let product = ProductUuid::new();
    let mut cart = Cart::new();
    cart.add_line(line(product, Size::S, 2, Some(3)))?;

    let before = cart.clone();
    let result = cart.add_line(line(product, Size::S, 2, Some(3)));

    assert_eq!(
        result,
        Err(CartError::StockUnavailable {
            requested: 4,
            available: 3
        })
    );
    assert_eq!(cart, before);

    Ok(())
}

#[test]
fn an_order_follows_the_lifecycle_to_delivery() -> TestResult {
    let cart = Cart::with_lines(vec![line(ProductUuid::new(), Size::L, 1, None)])?;
    let draft = OrderDraft::from_cart(
        UserUuid::new(),
        &cart,
        AddressUuid::new(),
        PaymentMethod::Cod,
        &ChargesPolicy::default(),
    )?;
    let mut order = Order::place(draft, Timestamp::now())?;

    order.advance(OrderStatus::Processing)?;
    order.advance(OrderStatus::Shipped)?;

    assert_eq!(
        order.cancel(),
        Err(OrderError::NotCancellable(OrderStatus::Shipped))
    );

    order.advance(OrderStatus::Delivered)?;

    assert!(
        order
            .tracking()
            .iter()
            .all(|step| step.state == StepState::Completed),
        "every step should be completed once delivered"
    );
    assert!(order.advance(OrderStatus::Processing).is_err());

    Ok(())
}
