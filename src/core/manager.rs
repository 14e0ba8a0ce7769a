use crate::core::{Cart, CartLine, CartStore, Catalog, Notice, Notifier, ProductId};
use crate::utils::error::{CartError, Result};
use tokio::sync::watch;

/// Single source of truth for the cart. Views read snapshots through
/// [`CartManager::cart`] or [`CartManager::subscribe`] and route every change
/// through the three operations; failed operations never surface an error to
/// the caller, they emit one [`Notice`] instead.
pub struct CartManager<C: Catalog, S: CartStore, N: Notifier> {
    catalog: C,
    store: S,
    notifier: N,
    cart: Cart,
    publish: watch::Sender<Cart>,
}

impl<C: Catalog, S: CartStore, N: Notifier> CartManager<C, S, N> {
    /// Builds the manager from whatever the store holds. A missing or
    /// unparseable payload starts an empty cart.
    pub fn new(catalog: C, store: S, notifier: N) -> Self {
        let cart = Self::restore(&store);
        let (publish, _) = watch::channel(cart.clone());
        Self {
            catalog,
            store,
            notifier,
            cart,
            publish,
        }
    }

    fn restore(store: &S) -> Cart {
        match store.load() {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(cart) => cart,
                Err(e) => {
                    tracing::warn!("stored cart is malformed, starting empty: {}", e);
                    Cart::default()
                }
            },
            Ok(None) => Cart::default(),
            Err(e) => {
                tracing::warn!("could not read stored cart, starting empty: {}", e);
                Cart::default()
            }
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Receives a fresh cart value after every successful mutation.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.publish.subscribe()
    }

    pub async fn add_product(&mut self, product_id: ProductId) {
        if let Err(e) = self.try_add(product_id).await {
            self.report(e, Notice::AddFailed { product_id });
        }
    }

    pub fn remove_product(&mut self, product_id: ProductId) {
        if let Err(e) = self.try_remove(product_id) {
            self.report(e, Notice::RemoveFailed { product_id });
        }
    }

    pub async fn update_product_amount(&mut self, product_id: ProductId, amount: i64) {
        // 非正數量視為無效輸入,安靜忽略
        if amount <= 0 {
            return;
        }
        if let Err(e) = self.try_update(product_id, amount).await {
            self.report(e, Notice::UpdateFailed { product_id });
        }
    }

    async fn try_add(&mut self, product_id: ProductId) -> Result<()> {
        let existing = self.cart.amount_of(product_id);

        // 兩個查詢都必須成功,任一失敗即中止
        let product = self.catalog.product(product_id).await?;
        let stock = self.catalog.stock(product_id).await?;

        // Exhausted stock keeps its own rejection branch even though the
        // ceiling check below would also catch it.
        if stock.amount == 0 {
            return Err(CartError::OutOfStock {
                product_id,
                requested: existing + 1,
                available: 0,
            });
        }

        let requested = existing + 1;
        if requested > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                requested,
                available: stock.amount,
            });
        }

        let mut next = self.cart.clone();
        match next.line_mut(product_id) {
            Some(line) => line.amount = requested,
            None => next.push(CartLine::new(product, 1)),
        }
        self.commit(next)
    }

    fn try_remove(&mut self, product_id: ProductId) -> Result<()> {
        let mut next = self.cart.clone();
        next.remove(product_id)
            .ok_or(CartError::NotInCart { product_id })?;
        self.commit(next)
    }

    async fn try_update(&mut self, product_id: ProductId, amount: i64) -> Result<()> {
        if self.cart.line(product_id).is_none() {
            return Err(CartError::NotInCart { product_id });
        }

        let stock = self.catalog.stock(product_id).await?;
        if amount > i64::from(stock.amount) {
            return Err(CartError::OutOfStock {
                product_id,
                requested: u32::try_from(amount).unwrap_or(u32::MAX),
                available: stock.amount,
            });
        }

        let mut next = self.cart.clone();
        if let Some(line) = next.line_mut(product_id) {
            line.amount = amount as u32;
        }
        self.commit(next)
    }

    /// Persists the working copy, then installs and republishes it. A failed
    /// write discards the copy, so memory and published state stay at the
    /// last persisted cart.
    fn commit(&mut self, next: Cart) -> Result<()> {
        let payload = serde_json::to_string(&next)?;
        self.store.save(&payload)?;
        self.cart = next;
        self.publish.send_replace(self.cart.clone());
        tracing::debug!(lines = self.cart.len(), "cart persisted and republished");
        Ok(())
    }

    fn report(&self, error: CartError, fallback: Notice) {
        let notice = if error.is_out_of_stock() {
            Notice::OutOfStock {
                product_id: fallback.product_id(),
            }
        } else {
            fallback
        };
        tracing::warn!("cart operation rejected: {}", error);
        self.notifier.notify(notice);
    }
}
