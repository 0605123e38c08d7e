//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashSet;
use storefront::{
    cart::{Cart, CartLine, CartLineUuid, reconcile},
    catalog::ProductUuid,
    customers::{SessionUuid, UserUuid},
};
use tracing::{Span, debug, info};

use crate::domain::{
    carts::{
        errors::CartsServiceError,
        models::{CartOwner, NewCartItem},
        store::CartStore,
    },
    products::{models::Product, repository::ProductsRepository},
};

#[derive(Clone)]
pub struct StoreCartsService {
    store: Arc<dyn CartStore>,
    products: Arc<dyn ProductsRepository>,
}

impl StoreCartsService {
    #[must_use]
    pub fn new(store: Arc<dyn CartStore>, products: Arc<dyn ProductsRepository>) -> Self {
        Self { store, products }
    }

    async fn product(&self, product: ProductUuid) -> Result<Product, CartsServiceError> {
        self.products
            .find(product)
            .await?
            .ok_or(CartsServiceError::ProductNotFound(product))
    }

    /// Overwrite client-supplied catalog fields with current catalog data and
    /// clamp the quantity to current stock. Lines whose product has gone, is
    /// out of stock, or no longer offers the selected size or color are
    /// dropped.
    async fn refresh_line(&self, mut line: CartLine) -> Result<Option<CartLine>, CartsServiceError> {
        let Some(product) = self.products.find(line.product).await? else {
            debug!(product_uuid = %line.product, "dropping line for unknown product");

            return Ok(None);
        };

        if !product.offers_size(line.size) || !product.offers_color(line.color) {
            debug!(
                product_uuid = %product.uuid,
                size = %line.size,
                color = %line.color,
                "dropping line for a selection the product does not offer"
            );

            return Ok(None);
        }

        if let Some(stock) = product.stock {
            if stock == 0 {
                debug!(product_uuid = %product.uuid, "dropping line for out of stock product");

                return Ok(None);
            }

            line.quantity = line.quantity.min(stock);
        }

        line.name = product.name.clone();
        line.image = product.primary_image().map(str::to_string);
        line.price = product.price;
        line.stock = product.stock;

        Ok(Some(line))
    }
}

#[async_trait]
impl CartsService for StoreCartsService {
    async fn get_cart(&self, owner: CartOwner) -> Result<Cart, CartsServiceError> {
        Ok(self.store.load(owner).await?)
    }

    #[tracing::instrument(
        name = "carts.service.add_item",
        skip(self, item),
        fields(
            owner = %owner,
            product_uuid = %item.product,
            quantity = item.quantity,
            line_count = tracing::field::Empty
        ),
        err
    )]
    async fn add_item(
        &self,
        owner: CartOwner,
        item: NewCartItem,
    ) -> Result<Cart, CartsServiceError> {
        let product = self.product(item.product).await?;

        if !product.offers_size(item.size) {
            return Err(CartsServiceError::SizeUnavailable(item.size));
        }

        if !product.offers_color(item.color) {
            return Err(CartsServiceError::ColorUnavailable(item.color));
        }

        let mut cart = self.store.load(owner).await?;

        cart.add_line(CartLine {
            uuid: CartLineUuid::new(),
            product: product.uuid,
            image: product.primary_image().map(str::to_string),
            name: product.name,
            price: product.price,
            size: item.size,
            color: item.color,
            quantity: item.quantity,
            stock: product.stock,
        })?;

        Span::current().record("line_count", cart.len());

        self.store.save(owner, cart.clone()).await?;

        Ok(cart)
    }

    #[tracing::instrument(
        name = "carts.service.update_quantity",
        skip(self),
        fields(owner = %owner, line_uuid = %line, stored_quantity = tracing::field::Empty),
        err
    )]
    async fn update_quantity(
        &self,
        owner: CartOwner,
        line: CartLineUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError> {
        let mut cart = self.store.load(owner).await?;

        let stored = cart.update_quantity(line, quantity)?;

        Span::current().record("stored_quantity", stored);

        self.store.save(owner, cart.clone()).await?;

        Ok(cart)
    }

    async fn remove_item(
        &self,
        owner: CartOwner,
        line: CartLineUuid,
    ) -> Result<Cart, CartsServiceError> {
        let mut cart = self.store.load(owner).await?;

        if cart.remove_line(line).is_some() {
            self.store.save(owner, cart.clone()).await?;
        }

        Ok(cart)
    }

    async fn clear_cart(&self, owner: CartOwner) -> Result<(), CartsServiceError> {
        self.store.delete(owner).await?;

        Ok(())
    }

    #[tracing::instrument(
        name = "carts.service.sync_cart",
        skip(self, lines),
        fields(owner = %owner, local_lines = lines.len(), merged_lines = tracing::field::Empty),
        err
    )]
    async fn sync_cart(
        &self,
        owner: CartOwner,
        lines: Vec<CartLine>,
    ) -> Result<Cart, CartsServiceError> {
        let server = self.store.load(owner).await?;

        // Line ids are only unique within one cart, so a client id may
        // already name a different stored line.
        let mut taken: FxHashSet<CartLineUuid> =
            server.lines().iter().map(|line| line.uuid).collect();
        let mut refreshed = Vec::with_capacity(lines.len());

        for line in lines {
            if let Some(mut line) = self.refresh_line(line).await? {
                while !taken.insert(line.uuid) {
                    line.uuid = CartLineUuid::new();
                }

                refreshed.push(line);
            }
        }

        let local = Cart::with_lines(refreshed)?;

        let merged = reconcile(local, server);

        Span::current().record("merged_lines", merged.len());

        self.store.save(owner, merged.clone()).await?;

        Ok(merged)
    }

    #[tracing::instrument(
        name = "carts.service.merge_guest_cart",
        skip(self),
        fields(session_uuid = %session, user_uuid = %user),
        err
    )]
    async fn merge_guest_cart(
        &self,
        session: SessionUuid,
        user: UserUuid,
    ) -> Result<Cart, CartsServiceError> {
        let guest = CartOwner::Guest(session);
        let customer = CartOwner::Customer(user);

        let local = self.store.load(guest).await?;
        let server = self.store.load(customer).await?;

        let merged = reconcile(local, server);

        self.store.save(customer, merged.clone()).await?;
        self.store.delete(guest).await?;

        info!(lines = merged.len(), "merged guest cart");

        Ok(merged)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the owner's cart; empty if nothing is stored.
    async fn get_cart(&self, owner: CartOwner) -> Result<Cart, CartsServiceError>;

    /// Add a catalog product to the owner's cart, merging with an existing
    /// line for the same product, size and color.
    async fn add_item(&self, owner: CartOwner, item: NewCartItem)
    -> Result<Cart, CartsServiceError>;

    /// Set a line's quantity, clamped to stock.
    async fn update_quantity(
        &self,
        owner: CartOwner,
        line: CartLineUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove a line. Removing a missing line is a no-op.
    async fn remove_item(
        &self,
        owner: CartOwner,
        line: CartLineUuid,
    ) -> Result<Cart, CartsServiceError>;

    /// Empty the owner's cart.
    async fn clear_cart(&self, owner: CartOwner) -> Result<(), CartsServiceError>;

    /// Reconcile lines persisted on the client with the stored cart.
    async fn sync_cart(
        &self,
        owner: CartOwner,
        lines: Vec<CartLine>,
    ) -> Result<Cart, CartsServiceError>;

    /// Fold a guest session's cart into a customer's cart on sign-in.
    async fn merge_guest_cart(
        &self,
        session: SessionUuid,
        user: UserUuid,
    ) -> Result<Cart, CartsServiceError>;
}
