//! Price-estimation proxy handler.
//!
//! Forwards the feature payload to the configured upstream through the
//! predict client. Downstream failure is never a failure here: the
//! response is always `200` with either the upstream's validated answer or
//! the fixed fallback. Only a malformed request body yields an error, and
//! that one is a `400` with a generic message.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::instrument;

use crate::predict::PredictRequest;
use crate::state::AppState;

/// Handle `POST /api/predict`.
#[instrument(skip(state, payload))]
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(request)) => {
            let response = state.predictor().predict(&request).await;
            Json(response).into_response()
        }
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejecting malformed predict request");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid request body" })),
            )
                .into_response()
        }
    }
}
