//! Persistent session state.
//!
//! [`CartSession`] and [`OrderHistory`] wrap the pure core engines with
//! save-on-every-mutation persistence through a [`BlobStore`]. They are
//! constructed once at startup, owned by the application state, and injected
//! into handlers; there is no ambient global state.
//!
//! Saves are fire-and-forget: a failed write is logged at warn level and
//! never surfaced to the caller.

use std::sync::Arc;

use phonestore_core::cart::Cart;
use phonestore_core::order::{OrderBook, OrderDraft, OrderError};
use phonestore_core::{Order, OrderStatus, Selection};

use crate::persist::{BlobStore, CART_BLOB, ORDERS_BLOB};

/// The single cart for this installation, persisted across restarts.
pub struct CartSession {
    cart: Cart,
    store: Arc<dyn BlobStore>,
}

impl CartSession {
    /// Load the persisted cart, falling back to an empty one when the blob
    /// is missing or unreadable.
    pub fn load(store: Arc<dyn BlobStore>) -> Self {
        let cart = store
            .load(CART_BLOB)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(cart) => Some(cart),
                Err(error) => {
                    tracing::warn!(%error, blob = CART_BLOB, "discarding unreadable cart blob");
                    None
                }
            })
            .unwrap_or_default();
        Self { cart, store }
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_item(
        &mut self,
        product_id: &str,
        quantity: u32,
        selection: Selection,
        unit_price: Option<i64>,
    ) {
        self.cart.add_item(product_id, quantity, selection, unit_price);
        self.persist();
    }

    pub fn remove_item(&mut self, product_id: &str, selection: &Selection) {
        self.cart.remove_item(product_id, selection);
        self.persist();
    }

    pub fn update_quantity(&mut self, product_id: &str, quantity: u32, selection: &Selection) {
        self.cart.update_quantity(product_id, quantity, selection);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    fn persist(&self) {
        save_blob(self.store.as_ref(), CART_BLOB, &self.cart);
    }
}

/// The persisted order history for this installation.
pub struct OrderHistory {
    book: OrderBook,
    store: Arc<dyn BlobStore>,
}

impl OrderHistory {
    /// Load the persisted order list, falling back to an empty history.
    pub fn load(store: Arc<dyn BlobStore>) -> Self {
        let orders: Vec<Order> = store
            .load(ORDERS_BLOB)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(orders) => Some(orders),
                Err(error) => {
                    tracing::warn!(%error, blob = ORDERS_BLOB, "discarding unreadable orders blob");
                    None
                }
            })
            .unwrap_or_default();
        Self {
            book: OrderBook::from_orders(orders),
            store,
        }
    }

    pub fn create(&mut self, draft: OrderDraft) -> Order {
        let order = self.book.create(draft);
        self.persist();
        order
    }

    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Order> {
        self.book.by_id(id)
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        self.book.orders()
    }

    /// Forward-only status update; persists on success.
    ///
    /// # Errors
    ///
    /// Propagates [`OrderError`] from the order book.
    pub fn update_status(&mut self, id: &str, status: OrderStatus) -> Result<Order, OrderError> {
        let order = self.book.update_status(id, status)?;
        self.persist();
        Ok(order)
    }

    fn persist(&self) {
        save_blob(self.store.as_ref(), ORDERS_BLOB, &self.book.orders());
    }
}

fn save_blob<T: serde::Serialize>(store: &dyn BlobStore, name: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => {
            if let Err(error) = store.save(name, &raw) {
                tracing::warn!(%error, blob = name, "failed to persist blob");
            }
        }
        Err(error) => tracing::warn!(%error, blob = name, "failed to serialize blob"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;
    use phonestore_core::{OrderItem, PaymentMethod, ShippingInfo};

    fn draft() -> OrderDraft {
        OrderDraft {
            items: vec![OrderItem {
                product_id: "p1".to_string(),
                quantity: 1,
                price: 5_000_000,
                variant_label: None,
                color: None,
            }],
            subtotal: 5_000_000,
            shipping_fee: 50_000,
            discount: None,
            payment_method: PaymentMethod::Momo,
            shipping: ShippingInfo {
                full_name: "Tran B".to_string(),
                phone: "0911111111".to_string(),
                email: "b@example.com".to_string(),
                address: "2 Hai Ba Trung".to_string(),
                city: "Ha Noi".to_string(),
                district: "Hoan Kiem".to_string(),
                note: None,
            },
            note: None,
            eta: None,
        }
    }

    #[test]
    fn cart_survives_reload() {
        let store = Arc::new(MemoryStore::new());

        let mut session = CartSession::load(Arc::clone(&store) as Arc<dyn BlobStore>);
        session.add_item("p1", 2, Selection::none(), Some(9_000_000));

        let reloaded = CartSession::load(store as Arc<dyn BlobStore>);
        assert_eq!(reloaded.cart().total_items(), 2);
        assert_eq!(
            reloaded.cart().lines().first().and_then(|l| l.unit_price),
            Some(9_000_000)
        );
    }

    #[test]
    fn corrupt_cart_blob_falls_back_to_empty() {
        let store = Arc::new(MemoryStore::new());
        store.save(CART_BLOB, "not json").expect("save");

        let session = CartSession::load(store as Arc<dyn BlobStore>);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn orders_survive_reload() {
        let store = Arc::new(MemoryStore::new());

        let mut history = OrderHistory::load(Arc::clone(&store) as Arc<dyn BlobStore>);
        let order = history.create(draft());

        let reloaded = OrderHistory::load(store as Arc<dyn BlobStore>);
        assert!(reloaded.by_id(&order.id).is_some());
        assert_eq!(reloaded.orders().len(), 1);
    }

    #[test]
    fn status_updates_are_persisted() {
        let store = Arc::new(MemoryStore::new());

        let mut history = OrderHistory::load(Arc::clone(&store) as Arc<dyn BlobStore>);
        let order = history.create(draft());
        history
            .update_status(&order.id, OrderStatus::Shipped)
            .expect("forward transition");

        let reloaded = OrderHistory::load(store as Arc<dyn BlobStore>);
        assert_eq!(
            reloaded.by_id(&order.id).map(|o| o.status),
            Some(OrderStatus::Shipped)
        );
    }
}
