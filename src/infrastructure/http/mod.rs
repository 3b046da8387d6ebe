pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, podcast::PodcastController};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the application router
pub fn build_router(config: Arc<Config>, podcast_controller: Arc<PodcastController>) -> Router {
    let podcast_routes = Router::new()
        .route("/api/podcasts", post(PodcastController::create_podcast))
        .route("/api/voices", get(PodcastController::list_voices))
        .with_state(podcast_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config)
        .merge(podcast_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    podcast_controller: Arc<PodcastController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(config.clone(), podcast_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
