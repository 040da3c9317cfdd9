//! capdash-ui - Webcam capture and labeling dashboard
//!
//! Serves the browser dashboard, receives captured frames, relays them
//! to the classification service, and uploads labeled samples to the
//! dataset bucket.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use capdash_ui::config::Config;
use capdash_ui::registry::HttpModelRegistry;
use capdash_ui::relay::HttpClassifier;
use capdash_ui::state::DashboardState;
use capdash_ui::storage::S3ObjectStore;
use capdash_ui::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting capdash UI (capdash-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = Config::parse();
    info!("Dataset bucket: {} ({})", config.bucket, config.region);
    info!("Classification endpoint: {}", config.predict_url);
    info!("Model registry: {}", config.registry_url);

    // Credentials come from the SDK's default provider chain (environment
    // variables in the capture deployment); region from configuration.
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()))
        .load()
        .await;
    let store = Arc::new(S3ObjectStore::new(aws_sdk_s3::Client::new(&aws_config)));

    let registry = Arc::new(HttpModelRegistry::new(config.registry_url.clone())?);
    let classifier = Arc::new(HttpClassifier::new(config.predict_url.clone())?);

    let bind = config.bind.clone();
    let state = AppState::new(
        Arc::new(DashboardState::new()),
        store,
        registry,
        classifier,
        Arc::new(config),
    );
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .context("Failed to bind listener")?;
    info!("capdash-ui listening on http://{}", bind);
    info!("Health check: http://{}/health", bind);

    axum::serve(listener, app).await?;

    Ok(())
}
