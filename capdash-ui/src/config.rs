//! Configuration for capdash-ui
//!
//! Every setting is a CLI flag with an environment-variable fallback.
//! Bucket and region names follow the environment variables the capture
//! deployment already exports (`BUCKET_NAME`, `AWS_REGION`); AWS
//! credentials resolve through the SDK's default provider chain.

use clap::Parser;

/// Command-line / environment configuration for capdash-ui
#[derive(Parser, Debug, Clone)]
#[command(name = "capdash-ui")]
#[command(about = "Webcam capture and labeling dashboard")]
#[command(version)]
pub struct Config {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8050", env = "CAPDASH_BIND")]
    pub bind: String,

    /// Object storage bucket holding the labeled dataset
    #[arg(long, env = "BUCKET_NAME")]
    pub bucket: String,

    /// AWS region for the dataset bucket
    #[arg(long, default_value = "us-east-1", env = "AWS_REGION")]
    pub region: String,

    /// Classification endpoint receiving captured frames
    #[arg(
        long,
        default_value = "http://localhost:8000/predict",
        env = "CAPDASH_PREDICT_URL"
    )]
    pub predict_url: String,

    /// Base URL of the model registry
    #[arg(
        long,
        default_value = "http://localhost:8001",
        env = "CAPDASH_REGISTRY_URL"
    )]
    pub registry_url: String,

    /// Filter expression passed verbatim to the registry's model search
    #[arg(long, default_value = "Widget", env = "CAPDASH_MODEL_FILTER")]
    pub model_filter: String,

    /// Model preselected when the registry listing contains it
    #[arg(long, default_value = "Widget 3", env = "CAPDASH_DEFAULT_MODEL")]
    pub default_model: String,
}
