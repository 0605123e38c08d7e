//! App Router

use salvo::Router;

use crate::{admin, carts, healthcheck, identity, orders, products};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(
            Router::new()
                .hoop(identity::middleware::handler)
                .push(cart_router())
                .push(orders_router()),
        )
        .push(
            Router::with_path("admin")
                .hoop(admin::middleware::handler)
                .push(
                    Router::with_path("orders/{order}/status")
                        .patch(admin::handlers::status::handler),
                ),
        )
}

fn cart_router() -> Router {
    Router::with_path("cart")
        .get(carts::get::handler)
        .delete(carts::delete::handler)
        .push(Router::with_path("sync").post(carts::sync::handler))
        .push(Router::with_path("merge").post(carts::merge::handler))
        .push(
            Router::with_path("items")
                .post(carts::items::create::handler)
                .push(
                    Router::with_path("{line}")
                        .put(carts::items::update::handler)
                        .delete(carts::items::delete::handler),
                ),
        )
}

fn orders_router() -> Router {
    Router::with_path("orders")
        .get(orders::index::handler)
        .post(orders::create::handler)
        .push(
            Router::with_path("{order}")
                .get(orders::get::handler)
                .push(Router::with_path("tracking").get(orders::tracking::handler))
                .push(Router::with_path("cancel").put(orders::cancel::handler)),
        )
}
