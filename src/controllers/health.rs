use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use crate::infrastructure::config::{Config, StorageBackend};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    let storage = match config.storage_backend {
        StorageBackend::S3 => "s3",
        StorageBackend::Local => "local",
    };
    let datastore = if config.supabase_credentials().is_some() {
        "configured"
    } else {
        "disabled"
    };

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "storage": storage,
            "datastore": datastore,
        })),
    )
}
