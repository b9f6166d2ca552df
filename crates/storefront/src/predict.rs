//! Price-estimation client.
//!
//! Sends a feature payload to the external prediction service and enforces a
//! timeout. Every failure path - missing configuration, transport error,
//! non-2xx status, timeout, or an ill-typed body - degrades to one fixed
//! fallback estimate, so callers cannot distinguish "service down" from
//! "service slow" from "not configured". [`PredictClient::predict`] never
//! returns an error.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::config::PredictConfig;

/// Feature payload for the prediction service.
///
/// Field names match the upstream wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    /// RAM in GB.
    pub ram_gb: f64,
    /// Storage bucket: "32", "64", "128", "256", "512", "1TB", or "2TB".
    pub rom_option: String,
    pub chip: String,
    /// "Apple", "Samsung", "Oppo", "Honor", "Vivo", or "Other".
    pub brand: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_camera_mp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_camera_mp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_mah: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_size_in: Option<f64>,
    /// Accepted but unused by the current model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_weight_g: Option<f64>,
}

/// Prediction result.
///
/// Deserializing through this type is also the response validation:
/// `price_usd` and `price_vnd` must be JSON numbers or the body counts as a
/// failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub price_usd: f64,
    pub price_vnd: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proba: Option<Vec<f64>>,
}

/// The fixed estimate served whenever live estimation is unavailable or
/// invalid. Identical across all failure paths.
#[must_use]
pub fn fallback_response() -> PredictResponse {
    PredictResponse {
        price_usd: 699.99,
        price_vnd: 17_499_750.0,
        class: Some(2),
        proba: Some(vec![0.05, 0.15, 0.6, 0.2]),
    }
}

/// Why a live prediction could not be served. Internal only; absorbed into
/// the fallback before reaching callers.
#[derive(Debug, Error)]
enum PredictError {
    #[error("no upstream configured")]
    NotConfigured,

    #[error("upstream call timed out")]
    Timeout,

    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the external price-prediction service.
#[derive(Clone)]
pub struct PredictClient {
    inner: Arc<PredictClientInner>,
}

struct PredictClientInner {
    client: reqwest::Client,
    upstream_url: Option<String>,
    timeout: Duration,
}

impl PredictClient {
    /// Create a new prediction client.
    #[must_use]
    pub fn new(config: &PredictConfig) -> Self {
        Self {
            inner: Arc::new(PredictClientInner {
                client: reqwest::Client::new(),
                upstream_url: config.upstream_url.clone(),
                timeout: config.timeout,
            }),
        }
    }

    /// Estimate a price for the given features.
    ///
    /// Always yields a response: the upstream's validated answer, or the
    /// fixed fallback on any failure. One attempt per invocation, no retry.
    #[instrument(skip(self, request))]
    pub async fn predict(&self, request: &PredictRequest) -> PredictResponse {
        match self.try_predict(request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(%error, "prediction unavailable, serving fallback estimate");
                fallback_response()
            }
        }
    }

    async fn try_predict(&self, request: &PredictRequest) -> Result<PredictResponse, PredictError> {
        let url = self
            .inner
            .upstream_url
            .as_deref()
            .ok_or(PredictError::NotConfigured)?;

        // The timeout covers the whole exchange, body read included.
        let exchange = async {
            let response = self
                .inner
                .client
                .post(url)
                .json(request)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(PredictError::Status(status));
            }

            let parsed = response.json::<PredictResponse>().await?;
            Ok(parsed)
        };

        tokio::time::timeout(self.inner.timeout, exchange)
            .await
            .map_err(|_| PredictError::Timeout)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_the_fixed_estimate() {
        let fallback = fallback_response();
        assert!((fallback.price_usd - 699.99).abs() < f64::EPSILON);
        assert!((fallback.price_vnd - 17_499_750.0).abs() < f64::EPSILON);
        assert_eq!(fallback.class, Some(2));
        assert_eq!(fallback.proba, Some(vec![0.05, 0.15, 0.6, 0.2]));
    }

    #[test]
    fn fallback_is_identical_across_calls() {
        let a = serde_json::to_string(&fallback_response()).expect("serialize");
        let b = serde_json::to_string(&fallback_response()).expect("serialize");
        assert_eq!(a, b);
    }

    #[test]
    fn response_requires_numeric_prices() {
        let bad = r#"{"price_usd": "bad", "price_vnd": 17499750}"#;
        assert!(serde_json::from_str::<PredictResponse>(bad).is_err());

        let good = r#"{"price_usd": 699.99, "price_vnd": 17499750}"#;
        let parsed = serde_json::from_str::<PredictResponse>(good).expect("parse");
        assert_eq!(parsed.class, None);
    }

    #[test]
    fn request_omits_absent_optional_features() {
        let request = PredictRequest {
            ram_gb: 8.0,
            rom_option: "256".to_string(),
            chip: "A17 Pro".to_string(),
            brand: "Apple".to_string(),
            front_camera_mp: None,
            back_camera_mp: Some(48.0),
            battery_mah: None,
            screen_size_in: None,
            mobile_weight_g: None,
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert!(json.get("front_camera_mp").is_none());
        assert_eq!(json.get("back_camera_mp").and_then(|v| v.as_f64()), Some(48.0));
    }

    #[tokio::test]
    async fn unconfigured_client_serves_fallback() {
        let client = PredictClient::new(&PredictConfig {
            upstream_url: None,
            timeout: Duration::from_secs(7),
        });
        let response = client
            .predict(&PredictRequest {
                ram_gb: 8.0,
                rom_option: "128".to_string(),
                chip: "Snapdragon 8 Gen 3".to_string(),
                brand: "Samsung".to_string(),
                front_camera_mp: None,
                back_camera_mp: None,
                battery_mah: None,
                screen_size_in: None,
                mobile_weight_g: None,
            })
            .await;
        assert_eq!(response, fallback_response());
    }
}
