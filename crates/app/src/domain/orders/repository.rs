//! Orders Repository

use std::{cmp::Reverse, collections::hash_map::Entry};

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use storefront::{
    customers::UserUuid,
    orders::{Order, OrderStatus, OrderUuid},
};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::storage::StorageError;

/// Why a compare-and-set status update did not apply.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusUpdateError {
    #[error("order not found")]
    NotFound,

    #[error("order status is {actual}")]
    Conflict { actual: OrderStatus },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[automock]
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Persist a new order.
    async fn create(&self, order: Order) -> Result<Order, StorageError>;

    /// A single order, if it exists.
    async fn find(&self, order: OrderUuid) -> Result<Option<Order>, StorageError>;

    /// A customer's orders, newest first, optionally filtered by status.
    async fn list_for_user(
        &self,
        user: UserUuid,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, StorageError>;

    /// Atomically move an order from `expected` to `new`. Fails with
    /// [`StatusUpdateError::Conflict`] if the stored status is not `expected`.
    async fn update_status(
        &self,
        order: OrderUuid,
        expected: OrderStatus,
        new: OrderStatus,
    ) -> Result<Order, StatusUpdateError>;
}

#[derive(Debug, Default)]
pub struct InMemoryOrdersRepository {
    orders: RwLock<FxHashMap<OrderUuid, Order>>,
}

impl InMemoryOrdersRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrdersRepository for InMemoryOrdersRepository {
    async fn create(&self, order: Order) -> Result<Order, StorageError> {
        match self.orders.write().await.entry(order.uuid) {
            Entry::Occupied(_) => Err(StorageError::Duplicate(order.uuid.to_string())),
            Entry::Vacant(slot) => Ok(slot.insert(order).clone()),
        }
    }

    async fn find(&self, order: OrderUuid) -> Result<Option<Order>, StorageError> {
        Ok(self.orders.read().await.get(&order).cloned())
    }

    async fn list_for_user(
        &self,
        user: UserUuid,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, StorageError> {
        let mut orders: Vec<Order> = self
            .orders
            .read()
            .await
            .values()
            .filter(|order| order.user == user)
            .filter(|order| status.is_none_or(|status| order.status == status))
            .cloned()
            .collect();

        orders.sort_by_key(|order| Reverse((order.created_at, order.uuid)));

        Ok(orders)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        expected: OrderStatus,
        new: OrderStatus,
    ) -> Result<Order, StatusUpdateError> {
        let mut orders = self.orders.write().await;

        let stored = orders.get_mut(&order).ok_or(StatusUpdateError::NotFound)?;

        if stored.status != expected {
            return Err(StatusUpdateError::Conflict {
                actual: stored.status,
            });
        }

        stored.status = new;

        Ok(stored.clone())
    }
}
