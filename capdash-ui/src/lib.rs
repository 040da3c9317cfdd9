//! capdash-ui library - webcam capture and labeling dashboard
//!
//! Lets an operator capture a webcam frame, optionally classify or
//! validate it against a remote model, and label it as normal or anomaly
//! for storage in an object-storage bucket laid out as a training
//! dataset.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod registry;
pub mod relay;
pub mod state;
pub mod storage;

use config::Config;
use registry::ModelRegistry;
use relay::Classifier;
use state::DashboardState;
use storage::ObjectStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Capture/review dashboard state (single operator)
    pub dashboard: Arc<DashboardState>,
    /// Object storage gateway for the dataset bucket
    pub store: Arc<dyn ObjectStore>,
    /// Model registry lookup for the selector
    pub registry: Arc<dyn ModelRegistry>,
    /// Classification relay
    pub classifier: Arc<dyn Classifier>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        dashboard: Arc<DashboardState>,
        store: Arc<dyn ObjectStore>,
        registry: Arc<dyn ModelRegistry>,
        classifier: Arc<dyn Classifier>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            dashboard,
            store,
            registry,
            classifier,
            config,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        // Browser UI (embedded assets)
        .route("/", get(api::ui::serve_index))
        .route("/static/webcam.js", get(api::ui::serve_webcam_js))
        // Health endpoint
        .route("/health", get(api::health::health_check))
        // Capture ingress from the browser script
        .route("/capture-frame", post(api::capture::capture_frame))
        // Panel poll + user actions
        .route("/panel", get(api::actions::get_panel))
        .route("/action/capture", post(api::actions::request_capture_panel))
        .route("/action/discard", post(api::actions::discard))
        .route("/action/classify", post(api::actions::classify))
        .route("/action/validate", post(api::actions::validate))
        .route("/action/dismiss", post(api::actions::dismiss))
        .route("/action/label", post(api::actions::label))
        // Model selector
        .route("/models", get(api::models::list_models))
        .route("/model", post(api::models::select_model))
        // Dataset inspection
        .route("/dataset/structure", get(api::dataset::structure))
        .route("/dataset/directories", get(api::dataset::directories))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
