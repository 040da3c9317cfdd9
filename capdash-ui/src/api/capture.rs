//! Capture ingress
//!
//! Sole entry point for frame data: the browser capture script POSTs the
//! canvas snapshot here as a base64 data URL.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CaptureFrameRequest {
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CaptureFrameResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct CaptureFrameError {
    pub error: String,
}

/// POST /capture-frame
///
/// Stores the frame as the pending capture (overwriting any prior one)
/// and signals any waiting panel request. Panel visibility is not
/// changed here; that happens via the capture action.
pub async fn capture_frame(
    State(state): State<AppState>,
    Json(req): Json<CaptureFrameRequest>,
) -> Response {
    match req.image {
        Some(image) if !image.is_empty() => {
            info!("Received image data ({} chars)", image.len());
            state.dashboard.store_frame(image).await;
            (
                StatusCode::OK,
                Json(CaptureFrameResponse {
                    status: "received".to_string(),
                }),
            )
                .into_response()
        }
        _ => {
            warn!("No image data received");
            (
                StatusCode::BAD_REQUEST,
                Json(CaptureFrameError {
                    error: "No image data provided".to_string(),
                }),
            )
                .into_response()
        }
    }
}
