//! Model selector endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::AppState;

/// Models available for the selector
///
/// `degraded` is true when the registry lookup failed, so an empty list
/// from a dead registry is distinguishable from "no models match the
/// filter". Both render as an empty selector.
#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
    pub degraded: bool,
    pub selected: Option<String>,
}

/// GET /models
///
/// Queries the registry with the configured filter expression. When
/// nothing is selected yet and the listing contains the configured
/// default model, it is preselected.
pub async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    let (models, degraded) = match state.registry.list_models(&state.config.model_filter).await {
        Ok(models) => (models, false),
        Err(e) => {
            error!("Model registry lookup failed: {}", e);
            (Vec::new(), true)
        }
    };

    if state.dashboard.selected_model().await.is_none()
        && models.iter().any(|m| m == &state.config.default_model)
    {
        state
            .dashboard
            .select_model(Some(state.config.default_model.clone()))
            .await;
    }

    Json(ModelsResponse {
        models,
        degraded,
        selected: state.dashboard.selected_model().await,
    })
}

#[derive(Debug, Deserialize)]
pub struct SelectModelRequest {
    pub model: String,
}

/// POST /model - select the model used as the dataset category
pub async fn select_model(
    State(state): State<AppState>,
    Json(req): Json<SelectModelRequest>,
) -> StatusCode {
    if req.model.is_empty() {
        state.dashboard.select_model(None).await;
    } else {
        info!("Model selected: {}", req.model);
        state.dashboard.select_model(Some(req.model)).await;
    }
    StatusCode::OK
}
