//! Order book.
//!
//! Orders are created once at checkout, stored newest-first, and never
//! mutated afterwards except for forward-only status transitions.

use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;
use thiserror::Error;

use crate::types::order::{Order, OrderItem, OrderStatus, PaymentMethod, ShippingInfo};

/// Days until the default delivery estimate.
pub const DEFAULT_ETA_DAYS: i64 = 3;

const ID_SUFFIX_LEN: usize = 4;
const ID_SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Errors from order book operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("order not found: {0}")]
    NotFound(String),

    /// Status may only move forward through the lifecycle.
    #[error("illegal status transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
}

/// Everything the caller supplies at checkout. The order book fills in the
/// id, status, timestamps, and total.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub items: Vec<OrderItem>,
    /// Sum of item prices in VND, as computed by the checkout flow.
    pub subtotal: i64,
    pub shipping_fee: i64,
    pub discount: Option<i64>,
    pub payment_method: PaymentMethod,
    pub shipping: ShippingInfo,
    pub note: Option<String>,
    pub eta: Option<DateTime<Utc>>,
}

/// In-memory order history, newest first.
#[derive(Debug, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from persisted orders (already newest-first).
    #[must_use]
    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// All orders, newest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Build and store an immutable order from a draft.
    ///
    /// The total is always recomputed here as
    /// `subtotal + shipping_fee - discount`, never trusted from the caller,
    /// and the ETA defaults to creation time plus [`DEFAULT_ETA_DAYS`].
    pub fn create(&mut self, draft: OrderDraft) -> Order {
        let created_at = Utc::now();
        let order = Order {
            id: generate_order_id(created_at),
            status: OrderStatus::Processing,
            total: draft.subtotal + draft.shipping_fee - draft.discount.unwrap_or(0),
            items: draft.items,
            subtotal: draft.subtotal,
            shipping_fee: draft.shipping_fee,
            discount: draft.discount,
            payment_method: draft.payment_method,
            shipping: draft.shipping,
            note: draft.note,
            created_at,
            eta: draft
                .eta
                .unwrap_or_else(|| created_at + Duration::days(DEFAULT_ETA_DAYS)),
        };
        self.orders.insert(0, order.clone());
        order
    }

    /// Look up an order by its generated id.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Replace the status of an order, enforcing the forward-only
    /// lifecycle. Writing the current status again is accepted as a no-op.
    ///
    /// # Errors
    ///
    /// `NotFound` for unknown ids, `InvalidTransition` for backward moves.
    pub fn update_status(&mut self, id: &str, status: OrderStatus) -> Result<Order, OrderError> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        if !order.status.can_advance_to(status) {
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to: status,
            });
        }
        order.status = status;
        Ok(order.clone())
    }
}

/// Generate an order id of the form `ORD-<YYYYMMDD>-<4 chars of A-Z0-9>`.
fn generate_order_id(created_at: DateTime<Utc>) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .filter_map(|_| ID_SUFFIX_CHARSET.choose(&mut rng))
        .map(|&b| char::from(b))
        .collect();
    format!("ORD-{}-{}", created_at.format("%Y%m%d"), suffix)
}
