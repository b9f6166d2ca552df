//! Checkout handler.
//!
//! Snapshots the cart into an immutable order, then clears the cart. The
//! cart-clear is this handler's responsibility, not the order book's.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::instrument;

use phonestore_core::order::OrderDraft;
use phonestore_core::{Order, OrderItem, PaymentMethod, ShippingInfo};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Checkout submission payload.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    pub shipping: ShippingInfo,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub shipping_fee: i64,
    pub discount: Option<i64>,
    pub note: Option<String>,
    pub eta: Option<DateTime<Utc>>,
}

/// Submit the current cart as an order.
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<CheckoutForm>,
) -> Result<(StatusCode, Json<Order>)> {
    // Snapshot lines while holding the catalog for price resolution.
    let (items, subtotal) = {
        let catalog = state.catalog();
        let session = state.cart();
        let cart = session.cart();
        if cart.is_empty() {
            return Err(AppError::BadRequest("Cart is empty".to_string()));
        }

        let items: Vec<OrderItem> = cart
            .lines()
            .iter()
            .map(|line| OrderItem {
                product_id: line.product_id.clone(),
                quantity: line.quantity,
                price: line
                    .unit_price
                    .or_else(|| catalog.price_of(&line.product_id))
                    .unwrap_or(0),
                variant_label: line.selection.variant_label.clone(),
                color: line.selection.color.clone(),
            })
            .collect();
        let subtotal = cart.subtotal(|id| catalog.price_of(id));
        (items, subtotal)
    };

    let order = state.orders().create(OrderDraft {
        items,
        subtotal,
        shipping_fee: form.shipping_fee,
        discount: form.discount,
        payment_method: form.payment_method,
        shipping: form.shipping,
        note: form.note,
        eta: form.eta,
    });

    tracing::info!(order_id = %order.id, total = order.total, "order placed");
    state.cart().clear();

    Ok((StatusCode::CREATED, Json(order)))
}
