//! Cart route handlers.
//!
//! Mutations return the refreshed cart view so clients can re-render
//! without a second round trip. Every mutation is persisted by the session
//! before the handler returns.

use axum::{
    Json,
    extract::State,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use phonestore_core::Selection;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Serialize)]
pub struct CartLineView {
    pub product_id: String,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub quantity: u32,
    /// Resolved unit price: snapshot, else current catalog price, else 0.
    pub unit_price: i64,
    pub line_total: i64,
}

/// Full cart display data.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub total_items: u32,
    pub subtotal: i64,
}

/// Add to cart payload.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub product_id: String,
    pub quantity: Option<u32>,
    pub variant_label: Option<String>,
    pub color: Option<String>,
    /// Explicit unit price snapshot. When absent and a variant is chosen,
    /// the variant's catalog price is snapshotted instead.
    pub unit_price: Option<i64>,
}

/// Update quantity payload.
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub product_id: String,
    pub quantity: u32,
    pub variant_label: Option<String>,
    pub color: Option<String>,
}

/// Remove from cart payload.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub product_id: String,
    pub variant_label: Option<String>,
    pub color: Option<String>,
}

/// Cart count payload.
#[derive(Debug, Serialize)]
pub struct CartCount {
    pub count: u32,
}

/// Build the cart view against the current catalog.
pub(crate) fn build_cart_view(state: &AppState) -> CartView {
    let catalog = state.catalog();
    let session = state.cart();
    let cart = session.cart();

    let items = cart
        .lines()
        .iter()
        .map(|line| {
            let product = catalog.by_id(&line.product_id);
            let unit_price = line
                .unit_price
                .or_else(|| catalog.price_of(&line.product_id))
                .unwrap_or(0);
            CartLineView {
                product_id: line.product_id.clone(),
                name: product.map(|p| p.name.clone()),
                slug: product.map(|p| p.slug.clone()),
                image: product.and_then(|p| p.images.first().cloned()),
                variant_label: line.selection.variant_label.clone(),
                color: line.selection.color.clone(),
                quantity: line.quantity,
                unit_price,
                line_total: unit_price * i64::from(line.quantity),
            }
        })
        .collect();

    CartView {
        items,
        total_items: cart.total_items(),
        subtotal: cart.subtotal(|id| catalog.price_of(id)),
    }
}

/// Display the cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(build_cart_view(&state))
}

/// Cart count badge data.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Json<CartCount> {
    let count = state.cart().cart().total_items();
    Json(CartCount { count })
}

/// Add an item to the cart.
#[instrument(skip(state, form))]
pub async fn add(
    State(state): State<AppState>,
    Json(form): Json<AddForm>,
) -> Result<Json<CartView>> {
    let selection = Selection::new(form.variant_label.clone(), form.color);
    let unit_price = {
        let catalog = state.catalog();
        let product = catalog
            .by_id(&form.product_id)
            .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;
        form.unit_price.or_else(|| {
            form.variant_label
                .as_deref()
                .and_then(|label| product.variant_price(label))
        })
    };

    state
        .cart()
        .add_item(&form.product_id, form.quantity.unwrap_or(1), selection, unit_price);
    Ok(Json(build_cart_view(&state)))
}

/// Update the quantity on a line.
#[instrument(skip(state, form))]
pub async fn update(State(state): State<AppState>, Json(form): Json<UpdateForm>) -> Json<CartView> {
    let selection = Selection::new(form.variant_label, form.color);
    state
        .cart()
        .update_quantity(&form.product_id, form.quantity, &selection);
    Json(build_cart_view(&state))
}

/// Remove a line from the cart.
#[instrument(skip(state, form))]
pub async fn remove(State(state): State<AppState>, Json(form): Json<RemoveForm>) -> Json<CartView> {
    let selection = Selection::new(form.variant_label, form.color);
    state.cart().remove_item(&form.product_id, &selection);
    Json(build_cart_view(&state))
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<CartView> {
    state.cart().clear();
    Json(build_cart_view(&state))
}
