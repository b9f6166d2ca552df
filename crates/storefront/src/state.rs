//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use phonestore_core::catalog::Catalog;

use crate::config::StorefrontConfig;
use crate::persist::BlobStore;
use crate::predict::PredictClient;
use crate::session::{CartSession, OrderHistory};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the catalog, the single cart/order
/// session for this installation, and the prediction client. Handlers
/// serialize access through the contained locks; there is one logical
/// session, so contention is not a concern.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: RwLock<Catalog>,
    cart: Mutex<CartSession>,
    orders: Mutex<OrderHistory>,
    predictor: PredictClient,
}

impl AppState {
    /// Create the application state: load both persisted blobs through the
    /// given store and build the prediction client from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog, store: Arc<dyn BlobStore>) -> Self {
        let cart = CartSession::load(Arc::clone(&store));
        let orders = OrderHistory::load(store);
        let predictor = PredictClient::new(&config.predict);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: RwLock::new(catalog),
                cart: Mutex::new(cart),
                orders: Mutex::new(orders),
                predictor,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Read access to the catalog.
    pub fn catalog(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner
            .catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the catalog (admin CRUD).
    pub fn catalog_mut(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner
            .catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive access to the cart session.
    pub fn cart(&self) -> MutexGuard<'_, CartSession> {
        self.inner
            .cart
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive access to the order history.
    pub fn orders(&self) -> MutexGuard<'_, OrderHistory> {
        self.inner
            .orders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Get a reference to the prediction client.
    #[must_use]
    pub fn predictor(&self) -> &PredictClient {
        &self.inner.predictor
    }
}
