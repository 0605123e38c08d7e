//! Cart Store
//!
//! Carts are persisted whole, keyed by owner. Concurrent writers resolve
//! last-write-wins.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use storefront::cart::Cart;
use tokio::sync::RwLock;

use crate::{domain::carts::models::CartOwner, storage::StorageError};

#[automock]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// The owner's cart, or an empty cart if none is stored.
    async fn load(&self, owner: CartOwner) -> Result<Cart, StorageError>;

    /// Replace the owner's cart.
    async fn save(&self, owner: CartOwner, cart: Cart) -> Result<(), StorageError>;

    /// Drop the owner's cart. Deleting a missing cart is not an error.
    async fn delete(&self, owner: CartOwner) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    carts: RwLock<FxHashMap<CartOwner, Cart>>,
}

impl InMemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn load(&self, owner: CartOwner) -> Result<Cart, StorageError> {
        Ok(self
            .carts
            .read()
            .await
            .get(&owner)
            .cloned()
            .unwrap_or_default())
    }

    async fn save(&self, owner: CartOwner, cart: Cart) -> Result<(), StorageError> {
        let mut carts = self.carts.write().await;

        if cart.is_empty() {
            carts.remove(&owner);
        } else {
            carts.insert(owner, cart);
        }

        Ok(())
    }

    async fn delete(&self, owner: CartOwner) -> Result<(), StorageError> {
        self.carts.write().await.remove(&owner);

        Ok(())
    }
}
