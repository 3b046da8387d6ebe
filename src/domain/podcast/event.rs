use super::error::PodcastServiceError;
use super::service::PodcastServiceApi;
use super::JobRequest;
use serde::{Deserialize, Serialize};

/// Invocation event for a publishing run
#[derive(Debug, Clone, Deserialize)]
pub struct PodcastEvent {
    pub newsletter_id: NewsletterId,
    pub target_duration: f64,
    pub voice_id: String,
    pub newsletter_text: String,
}

/// Newsletter ids arrive either as JSON strings or as any JSON number
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NewsletterId {
    Text(String),
    Number(serde_json::Number),
}

impl std::fmt::Display for NewsletterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NewsletterId::Text(id) => write!(f, "{}", id),
            NewsletterId::Number(id) => write!(f, "{}", id),
        }
    }
}

impl From<PodcastEvent> for JobRequest {
    fn from(event: PodcastEvent) -> Self {
        JobRequest {
            newsletter_id: event.newsletter_id.to_string(),
            newsletter_text: event.newsletter_text,
            target_duration_minutes: event.target_duration,
            voice_id: event.voice_id,
        }
    }
}

/// Response envelope: `{statusCode, body}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub status_code: u16,
    pub body: EventBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum EventBody {
    Published { podcast_url: String },
    Failed { error: String },
}

impl EventResponse {
    pub fn published(podcast_url: String) -> Self {
        Self {
            status_code: 200,
            body: EventBody::Published { podcast_url },
        }
    }

    pub fn failed(error: impl std::fmt::Display) -> Self {
        Self {
            status_code: 500,
            body: EventBody::Failed {
                error: error.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

/// Event entry point: every failure, malformed events included, becomes a 500 envelope
pub async fn handle_event(
    service: &dyn PodcastServiceApi,
    payload: serde_json::Value,
) -> EventResponse {
    let event: PodcastEvent = match serde_json::from_value(payload) {
        Ok(event) => event,
        Err(e) => {
            let err = PodcastServiceError::Invalid(format!("malformed event: {}", e));
            tracing::error!(error = %err, "Rejecting podcast event");
            return EventResponse::failed(err);
        }
    };

    match service.publish(JobRequest::from(event)).await {
        Ok(published) => EventResponse::published(published.podcast_url),
        Err(e) => {
            tracing::error!(error = %e, "Podcast event failed");
            EventResponse::failed(e)
        }
    }
}
