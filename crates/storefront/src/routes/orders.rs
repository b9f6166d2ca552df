//! Order tracking handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use phonestore_core::Order;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query flags for the order detail view.
#[derive(Debug, Deserialize)]
pub struct ShowQuery {
    /// Set by the checkout redirect for a one-time success banner. Pure
    /// display hint; never persisted.
    #[serde(default)]
    pub placed: Option<String>,
}

/// Order detail payload.
#[derive(Debug, Serialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub just_placed: bool,
}

/// Display an order by its generated id.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ShowQuery>,
) -> Result<Json<OrderView>> {
    let orders = state.orders();
    let order = orders
        .by_id(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    let just_placed = query.placed.as_deref() == Some("1");
    Ok(Json(OrderView { order, just_placed }))
}
