//! Admin CRUD handlers.
//!
//! A thin JSON surface over the catalog and order book. The admin panel UI
//! is an external collaborator; these handlers only expose its contract.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use phonestore_core::catalog::ProductPatch;
use phonestore_core::{Order, OrderStatus, Product};

use crate::error::{AppError, Result};
use crate::state::AppState;

const DEFAULT_ADMIN_LIMIT: usize = 100;

/// Admin listing/search query.
#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

/// Status update payload.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: OrderStatus,
}

/// List products; with `q`, search over name, brand, and id.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Json<Vec<Product>> {
    let limit = query.limit.unwrap_or(DEFAULT_ADMIN_LIMIT);
    let catalog = state.catalog();
    let products = match query.q {
        Some(ref q) if !q.trim().is_empty() => catalog.search_admin(q, limit),
        _ => {
            let mut all = catalog.all();
            all.truncate(limit);
            all
        }
    };
    Json(products)
}

/// Create a product. Duplicate ids and slugs are rejected with 409.
#[instrument(skip(state, product), fields(product_id = %product.id))]
pub async fn create(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<(StatusCode, Json<Product>)> {
    let mut catalog = state.catalog_mut();
    catalog.create(product.clone())?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Patch a product. Unknown ids are 404.
#[instrument(skip(state, patch))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    state
        .catalog_mut()
        .update(&id, patch)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Advance an order's status. Backward transitions are rejected with 409.
#[instrument(skip(state))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<StatusForm>,
) -> Result<Json<Order>> {
    let order = state.orders().update_status(&id, form.status)?;
    Ok(Json(order))
}
