//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use storefront::{
    customers::UserUuid,
    orders::{ChargesPolicy, Order, OrderDraft, OrderError, OrderStatus, OrderUuid},
};
use tracing::{Span, debug, info, warn};

use crate::{
    domain::{
        carts::{models::CartOwner, store::CartStore},
        orders::{
            errors::OrdersServiceError,
            models::{OrderTracking, PlaceOrder},
            repository::{OrdersRepository, StatusUpdateError},
        },
        products::repository::ProductsRepository,
    },
    notifications::Notifier,
};

/// Compare-and-set attempts before a status change gives up.
const MAX_STATUS_ATTEMPTS: usize = 3;

#[derive(Clone)]
pub struct StoreOrdersService {
    orders: Arc<dyn OrdersRepository>,
    carts: Arc<dyn CartStore>,
    products: Arc<dyn ProductsRepository>,
    notifier: Arc<dyn Notifier>,
    charges: ChargesPolicy,
}

impl StoreOrdersService {
    #[must_use]
    pub fn new(
        orders: Arc<dyn OrdersRepository>,
        carts: Arc<dyn CartStore>,
        products: Arc<dyn ProductsRepository>,
        notifier: Arc<dyn Notifier>,
        charges: ChargesPolicy,
    ) -> Self {
        Self {
            orders,
            carts,
            products,
            notifier,
            charges,
        }
    }

    async fn owned_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError> {
        self.orders
            .find(order)
            .await?
            .filter(|found| found.user == user)
            .ok_or(OrdersServiceError::NotFound)
    }

    /// Apply `decide` to the order's current status and store the result
    /// with a compare-and-set, re-deciding against the fresh status whenever
    /// another writer got there first.
    async fn change_status<F>(
        &self,
        mut order: Order,
        decide: F,
    ) -> Result<Order, OrdersServiceError>
    where
        F: Fn(OrderStatus) -> Result<OrderStatus, OrderError> + Send + Sync,
    {
        for _ in 0..MAX_STATUS_ATTEMPTS {
            let previous = order.status;
            let next = decide(previous)?;

            match self.orders.update_status(order.uuid, previous, next).await {
                Ok(updated) => {
                    if let Err(error) = self
                        .notifier
                        .order_status_changed(&updated, previous)
                        .await
                    {
                        warn!(order_uuid = %updated.uuid, %error, "status notification failed");
                    }

                    return Ok(updated);
                }
                Err(StatusUpdateError::Conflict { actual }) => {
                    debug!(order_uuid = %order.uuid, expected = %previous, %actual, "status changed concurrently");

                    order.status = actual;
                }
                Err(StatusUpdateError::NotFound) => return Err(OrdersServiceError::NotFound),
                Err(StatusUpdateError::Storage(error)) => return Err(error.into()),
            }
        }

        Err(OrdersServiceError::StatusContention)
    }
}

#[async_trait]
impl OrdersService for StoreOrdersService {
    #[tracing::instrument(
        name = "orders.service.place_order",
        skip(self, request),
        fields(
            user_uuid = %user,
            payment_method = %request.payment_method,
            order_uuid = tracing::field::Empty,
            order_number = tracing::field::Empty
        ),
        err
    )]
    async fn place_order(
        &self,
        user: UserUuid,
        request: PlaceOrder,
    ) -> Result<Order, OrdersServiceError> {
        let owner = CartOwner::Customer(user);
        let cart = self.carts.load(owner).await?;

        if cart.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        for line in cart.lines() {
            if self.products.find(line.product).await?.is_none() {
                return Err(OrdersServiceError::ProductUnavailable(line.product));
            }
        }

        let draft = OrderDraft::from_cart(
            user,
            &cart,
            request.address,
            request.payment_method,
            &self.charges,
        )?;

        let order = self
            .orders
            .create(Order::place(draft, Timestamp::now())?)
            .await?;

        let span = Span::current();

        span.record("order_uuid", tracing::field::display(order.uuid));
        span.record("order_number", tracing::field::display(&order.number));

        self.carts.delete(owner).await?;

        if let Err(error) = self.notifier.order_placed(&order).await {
            warn!(order_uuid = %order.uuid, %error, "order notification failed");
        }

        info!(total = %order.totals.total(), "placed order");

        Ok(order)
    }

    async fn get_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError> {
        self.owned_order(user, order).await
    }

    async fn list_orders(
        &self,
        user: UserUuid,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, OrdersServiceError> {
        Ok(self.orders.list_for_user(user, status).await?)
    }

    #[tracing::instrument(
        name = "orders.service.cancel_order",
        skip(self),
        fields(user_uuid = %user, order_uuid = %order),
        err
    )]
    async fn cancel_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError> {
        let current = self.owned_order(user, order).await?;

        self.change_status(current, OrderStatus::cancel).await
    }

    #[tracing::instrument(
        name = "orders.service.update_status",
        skip(self),
        fields(order_uuid = %order, status = %status),
        err
    )]
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let current = self
            .orders
            .find(order)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        self.change_status(current, |from: OrderStatus| from.advance(status))
            .await
    }

    async fn tracking(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<OrderTracking, OrdersServiceError> {
        Ok(self.owned_order(user, order).await?.into())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Check out the customer's cart: snapshot it into a pending order,
    /// priced with the configured charges, and empty the cart.
    async fn place_order(
        &self,
        user: UserUuid,
        request: PlaceOrder,
    ) -> Result<Order, OrdersServiceError>;

    /// Retrieve one of the customer's orders.
    async fn get_order(&self, user: UserUuid, order: OrderUuid)
    -> Result<Order, OrdersServiceError>;

    /// The customer's orders, newest first.
    async fn list_orders(
        &self,
        user: UserUuid,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, OrdersServiceError>;

    /// Customer-initiated cancellation.
    async fn cancel_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError>;

    /// Administrative status change.
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;

    /// One of the customer's orders with its tracking steps.
    async fn tracking(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<OrderTracking, OrdersServiceError>;
}
