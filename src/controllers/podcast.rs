use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::podcast::{handle_event, EventResponse, PodcastServiceApi, Voice},
    error::AppResult,
};

pub struct PodcastController {
    podcast_service: Arc<dyn PodcastServiceApi>,
}

impl PodcastController {
    pub fn new(podcast_service: Arc<dyn PodcastServiceApi>) -> Self {
        Self { podcast_service }
    }

    /// POST /api/podcasts - Run the pipeline for one newsletter event
    ///
    /// The body is parsed here rather than by the `Json` extractor so that a
    /// malformed event gets the same 500 envelope as any other failure.
    pub async fn create_podcast(
        State(controller): State<Arc<PodcastController>>,
        body: Bytes,
    ) -> Response {
        let payload = match serde_json::from_slice::<serde_json::Value>(&body) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, "Podcast request body is not JSON");
                return envelope_response(EventResponse::failed(format!(
                    "invalid input: malformed event: {}",
                    e
                )));
            }
        };

        let envelope = handle_event(controller.podcast_service.as_ref(), payload).await;
        envelope_response(envelope)
    }

    /// GET /api/voices - Voices available for synthesis
    pub async fn list_voices(
        State(controller): State<Arc<PodcastController>>,
    ) -> AppResult<Json<Vec<Voice>>> {
        let voices = controller.podcast_service.available_voices().await?;
        Ok(Json(voices))
    }
}

fn envelope_response(envelope: EventResponse) -> Response {
    let status =
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(envelope.body)).into_response()
}
