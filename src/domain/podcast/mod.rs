pub mod artifacts;
pub mod error;
pub mod event;
pub mod generator;
pub mod script;
pub mod service;
pub mod synthesis;

pub use artifacts::LocalArtifacts;
pub use error::PodcastServiceError;
pub use event::{handle_event, EventBody, EventResponse, PodcastEvent};
pub use generator::PodcastGenerator;
pub use script::{CompletionOptions, ScriptDrafter, ScriptPrompt};
pub use service::{storage_key, PodcastService, PodcastServiceApi};
pub use synthesis::{SpeechSynthesizer, SynthesisProfile};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One podcast job: everything the pipeline needs for a single run
#[derive(Debug, Clone, PartialEq)]
pub struct JobRequest {
    pub newsletter_id: String,
    pub newsletter_text: String,
    pub target_duration_minutes: f64,
    pub voice_id: String,
}

impl JobRequest {
    pub fn validate(&self) -> Result<(), PodcastServiceError> {
        if self.newsletter_id.trim().is_empty() {
            return Err(PodcastServiceError::Invalid(
                "newsletter_id cannot be empty".to_string(),
            ));
        }
        validate_inputs(
            &self.newsletter_text,
            self.target_duration_minutes,
            &self.voice_id,
        )
    }
}

pub(crate) fn validate_inputs(
    newsletter_text: &str,
    target_duration_minutes: f64,
    voice_id: &str,
) -> Result<(), PodcastServiceError> {
    if newsletter_text.trim().is_empty() {
        return Err(PodcastServiceError::Invalid(
            "newsletter_text cannot be empty".to_string(),
        ));
    }
    if !target_duration_minutes.is_finite() || target_duration_minutes <= 0.0 {
        return Err(PodcastServiceError::Invalid(format!(
            "target_duration must be a positive number of minutes, got {}",
            target_duration_minutes
        )));
    }
    if voice_id.trim().is_empty() {
        return Err(PodcastServiceError::Invalid(
            "voice_id cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Script and audio produced by the drafting and synthesis stages
#[derive(Debug, Clone)]
pub struct PodcastDraft {
    pub script: String,
    pub audio: Vec<u8>,
}

/// Result of the direct-call entry point
#[derive(Debug, Clone)]
pub struct GeneratedPodcast {
    pub monologue_text: String,
    pub transcript_path: PathBuf,
    pub audio_path: PathBuf,
}

/// Result of a full pipeline run
#[derive(Debug, Clone)]
pub struct PublishedPodcast {
    pub podcast_url: String,
    /// False when the datastore update failed; the asset is published regardless
    pub record_updated: bool,
}

/// A voice offered by the speech provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub voice_id: String,
    pub name: String,
}
