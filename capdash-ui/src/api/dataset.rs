//! Dataset inspection endpoints
//!
//! Read-only views over the bucket: the reconstructed split/label
//! structure and the top-level directory listing. Storage failures are
//! logged and degrade to empty results; the operator sees an empty
//! dataset, never an error page.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::error;

use capdash_common::dataset::DatasetStructure;

use crate::AppState;

/// GET /dataset/structure
///
/// Enumerates every key in the bucket and buckets each into
/// `{train,test} x {good,anomaly}`; keys outside the 4-segment layout
/// are ignored.
pub async fn structure(State(state): State<AppState>) -> Json<DatasetStructure> {
    let keys = match state.store.list_all_keys(&state.config.bucket).await {
        Ok(keys) => keys,
        Err(e) => {
            error!("Failed to list dataset keys: {}", e);
            Vec::new()
        }
    };
    Json(DatasetStructure::from_keys(keys))
}

#[derive(Debug, Serialize)]
pub struct DirectoriesResponse {
    pub directories: Vec<String>,
}

/// GET /dataset/directories - one-level listing of common prefixes
pub async fn directories(State(state): State<AppState>) -> Json<DirectoriesResponse> {
    let directories = match state.store.list_top_level_dirs(&state.config.bucket).await {
        Ok(dirs) => dirs,
        Err(e) => {
            error!("Failed to list bucket directories: {}", e);
            Vec::new()
        }
    };
    Json(DirectoriesResponse { directories })
}
