//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use phonestore_core::Product;

use crate::error::{AppError, Result};
use crate::state::AppState;

const DEFAULT_LIST_LIMIT: usize = 50;
const DEFAULT_RELATED_LIMIT: usize = 4;

/// Query for the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

/// Query for related products.
#[derive(Debug, Deserialize)]
pub struct RelatedQuery {
    pub limit: Option<usize>,
}

/// Query for nearest-price matching.
#[derive(Debug, Deserialize)]
pub struct SimilarQuery {
    /// Target price in VND.
    pub price: i64,
    pub exclude: Option<String>,
    pub limit: Option<usize>,
}

/// Product detail payload: the product plus related items from the same
/// brand.
#[derive(Debug, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub related: Vec<Product>,
}

/// List products, or search when a non-blank `q` is given.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Product>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let catalog = state.catalog();
    let products = match query.q {
        Some(ref q) if !q.trim().is_empty() => catalog.search(q, limit),
        _ => {
            let mut all = catalog.all();
            all.truncate(limit);
            all
        }
    };
    Json(products)
}

/// Product detail by slug, with up to four related products.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProductDetail>> {
    let catalog = state.catalog();
    let product = catalog
        .by_slug(&slug)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {slug}")))?;
    let related = catalog.related(&slug, DEFAULT_RELATED_LIMIT);
    Ok(Json(ProductDetail { product, related }))
}

/// Related products for a slug.
#[instrument(skip(state))]
pub async fn related(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<RelatedQuery>,
) -> Json<Vec<Product>> {
    let limit = query.limit.unwrap_or(DEFAULT_RELATED_LIMIT);
    Json(state.catalog().related(&slug, limit))
}

/// Products priced near a target, e.g. around an estimated price.
#[instrument(skip(state))]
pub async fn similar(
    State(state): State<AppState>,
    Query(query): Query<SimilarQuery>,
) -> Json<Vec<Product>> {
    let limit = query.limit.unwrap_or(DEFAULT_RELATED_LIMIT);
    Json(
        state
            .catalog()
            .similar_by_price(query.price, query.exclude.as_deref(), limit),
    )
}
