//! User action routes
//!
//! Each named dashboard action is one POST route. Responses carry the
//! panel snapshot so the browser can render the right panel without a
//! second round trip. Actions that need a captured frame and find none
//! are logged no-ops leaving state unchanged.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use capdash_common::codec::decode_data_url;
use capdash_common::dataset::{build_key, Label};

use crate::state::Panel;
use crate::AppState;

/// Snapshot of the dashboard for the browser
#[derive(Debug, Serialize)]
pub struct PanelResponse {
    pub panel: &'static str,
    pub captured_image: Option<String>,
    pub result_text: Option<String>,
    pub model: Option<String>,
}

async fn panel_response(state: &AppState) -> PanelResponse {
    let dashboard = &state.dashboard;
    PanelResponse {
        panel: dashboard.panel().await.as_str(),
        captured_image: dashboard.captured_frame().await,
        result_text: dashboard.result_text().await,
        model: dashboard.selected_model().await,
    }
}

/// GET /panel - current panel snapshot
pub async fn get_panel(State(state): State<AppState>) -> Json<PanelResponse> {
    Json(panel_response(&state).await)
}

/// POST /action/capture
///
/// Show the capture review panel if a frame is pending (waiting briefly
/// for the asynchronous browser producer), the live feed otherwise.
pub async fn request_capture_panel(State(state): State<AppState>) -> Json<PanelResponse> {
    let panel = state.dashboard.request_capture_panel().await;
    debug!("Capture panel requested, showing {}", panel.as_str());
    Json(panel_response(&state).await)
}

/// POST /action/discard
pub async fn discard(State(state): State<AppState>) -> Json<PanelResponse> {
    state.dashboard.discard().await;
    Json(panel_response(&state).await)
}

/// POST /action/classify
///
/// Forward the pending frame to the classification relay and show the
/// result panel. The frame is kept so the operator can still label it
/// after reviewing the result; relay failures surface as error text, not
/// as an HTTP error.
pub async fn classify(State(state): State<AppState>) -> Json<PanelResponse> {
    let dashboard = &state.dashboard;
    let Some(frame) = dashboard.captured_frame().await else {
        debug!("Classify requested with no captured frame, ignoring");
        return Json(panel_response(&state).await);
    };

    let text = match state.classifier.classify(&frame).await {
        Ok(result) => {
            info!("Frame classified as {}", result.label);
            match result.confidence {
                Some(confidence) => format!(
                    "Prediction: {} ({:.0}% confidence)",
                    result.label,
                    confidence * 100.0
                ),
                None => format!("Prediction: {}", result.label),
            }
        }
        Err(e) => {
            error!("Classification request failed: {}", e);
            format!("Classification Error: {}", e)
        }
    };

    dashboard.set_result_text(Some(text)).await;
    dashboard.set_panel(Panel::ClassificationResult).await;
    Json(panel_response(&state).await)
}

/// POST /action/validate
///
/// Placeholder validation: no model call is made yet. Renders a fixed
/// confidence annotated with the selected model choice and consumes the
/// frame.
pub async fn validate(State(state): State<AppState>) -> Json<PanelResponse> {
    let dashboard = &state.dashboard;
    if dashboard.captured_frame().await.is_none() {
        debug!("Validate requested with no captured frame, ignoring");
        return Json(panel_response(&state).await);
    }

    let model = dashboard
        .selected_model()
        .await
        .unwrap_or_else(|| "(no model selected)".to_string());
    info!("Validating capture with model: {}", model);
    let text = format!("Validated with {}: 95% confidence (heatmap_placeholder)", model);

    dashboard.set_result_text(Some(text)).await;
    dashboard.clear_frame().await;
    dashboard.set_panel(Panel::ValidationResult).await;
    Json(panel_response(&state).await)
}

/// POST /action/dismiss
///
/// Leave a result panel and return to the live feed. No storage effect.
pub async fn dismiss(State(state): State<AppState>) -> Json<PanelResponse> {
    state.dashboard.set_panel(Panel::LiveFeed).await;
    Json(panel_response(&state).await)
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelChoice {
    Normal,
    Anomaly,
}

impl LabelChoice {
    /// Dataset label bucket and filename prefix for this choice
    fn as_label(&self) -> (Label, &'static str) {
        match self {
            LabelChoice::Normal => (Label::Good, "normal"),
            LabelChoice::Anomaly => (Label::Anomaly, "anomaly"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LabelRequest {
    pub label: LabelChoice,
}

#[derive(Debug, Serialize)]
pub struct LabelResponse {
    pub uploaded: bool,
    #[serde(flatten)]
    pub state: PanelResponse,
}

/// POST /action/label
///
/// Decode the pending frame, build its dataset key under the selected
/// model's namespace, and upload it. The frame is consumed by the
/// labeling decision whether or not the upload succeeds. No-op when no
/// frame is pending or no model is selected (an unset model would leave
/// the category segment of the key undefined).
pub async fn label(
    State(state): State<AppState>,
    Json(req): Json<LabelRequest>,
) -> Json<LabelResponse> {
    let dashboard = &state.dashboard;

    let Some(frame) = dashboard.captured_frame().await else {
        warn!("Label action with no captured frame, ignoring");
        return Json(LabelResponse {
            uploaded: false,
            state: panel_response(&state).await,
        });
    };
    let Some(model) = dashboard.selected_model().await else {
        warn!("Label action with no model selected, ignoring");
        return Json(LabelResponse {
            uploaded: false,
            state: panel_response(&state).await,
        });
    };

    let (label, prefix) = req.label.as_label();
    let uploaded = match decode_data_url(&frame) {
        Ok(bytes) => {
            let key = build_key(&model, label.target_split(), label, prefix);
            match state
                .store
                .put(&state.config.bucket, &key, bytes, "image/jpeg")
                .await
            {
                Ok(()) => {
                    info!("{} data uploaded to {}", prefix, key);
                    true
                }
                Err(e) => {
                    error!("Failed to upload {} data: {}", prefix, e);
                    false
                }
            }
        }
        Err(e) => {
            error!("Captured frame could not be decoded: {}", e);
            false
        }
    };

    dashboard.clear_frame().await;
    dashboard.set_panel(Panel::LiveFeed).await;
    Json(LabelResponse {
        uploaded,
        state: panel_response(&state).await,
    })
}
