//! Classification relay
//!
//! Forwards a captured frame to the external classification service and
//! reshapes its response for the result panel. Any failure (connection,
//! timeout, bad payload) becomes an explicit `Relay` error; the handler
//! turns it into error text so the result panel always renders
//! something.

use std::time::Duration;

use async_trait::async_trait;
use capdash_common::{Error, Result};
use serde::{Deserialize, Serialize};

const PREDICT_TIMEOUT: Duration = Duration::from_secs(30);

/// Classification outcome for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    /// Confidence in [0, 1] when the service reports one
    pub confidence: Option<f64>,
}

/// Frame classification the dashboard needs
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, data_url: &str) -> Result<Classification>;
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    image: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    prediction: String,
    confidence: Option<f64>,
}

/// HTTP client for the classification endpoint
pub struct HttpClassifier {
    http: reqwest::Client,
    predict_url: String,
}

impl HttpClassifier {
    pub fn new(predict_url: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(PREDICT_TIMEOUT)
            .build()
            .map_err(|e| Error::Relay(e.to_string()))?;
        Ok(Self { http, predict_url })
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, data_url: &str) -> Result<Classification> {
        let response = self
            .http
            .post(&self.predict_url)
            .json(&PredictRequest { image: data_url })
            .send()
            .await
            .map_err(|e| Error::Relay(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Relay(format!(
                "classifier returned {}",
                response.status()
            )));
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| Error::Relay(format!("invalid classifier payload: {}", e)))?;
        Ok(Classification {
            label: body.prediction,
            confidence: body.confidence,
        })
    }
}
