//! Model registry lookup
//!
//! Queries the external model registry for the names that populate the
//! model selector. The filter expression from configuration is passed
//! verbatim to the registry's search. Lookup failures are explicit
//! errors so the handler can tell "registry down" apart from "no models
//! match" while still rendering an empty selector for both.

use std::time::Duration;

use async_trait::async_trait;
use capdash_common::{Error, Result};
use serde::Deserialize;

const REGISTRY_TIMEOUT: Duration = Duration::from_secs(10);

/// Registry search the dashboard needs
#[async_trait]
pub trait ModelRegistry: Send + Sync {
    async fn list_models(&self, filter: &str) -> Result<Vec<String>>;
}

#[derive(Debug, Deserialize)]
struct ModelListResponse {
    models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    name: String,
}

/// HTTP client for the model registry
pub struct HttpModelRegistry {
    http: reqwest::Client,
    base_url: String,
}

impl HttpModelRegistry {
    pub fn new(base_url: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REGISTRY_TIMEOUT)
            .build()
            .map_err(|e| Error::Registry(e.to_string()))?;
        Ok(Self { http, base_url })
    }
}

#[async_trait]
impl ModelRegistry for HttpModelRegistry {
    async fn list_models(&self, filter: &str) -> Result<Vec<String>> {
        let url = format!("{}/models", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .get(&url)
            .query(&[("filter", filter)])
            .send()
            .await
            .map_err(|e| Error::Registry(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Registry(format!(
                "registry returned {}",
                response.status()
            )));
        }

        let body: ModelListResponse = response
            .json()
            .await
            .map_err(|e| Error::Registry(format!("invalid registry payload: {}", e)))?;
        Ok(body.models.into_iter().map(|m| m.name).collect())
    }
}
