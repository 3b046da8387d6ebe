use super::error::PodcastServiceError;
use super::generator::PodcastGenerator;
use super::{JobRequest, PublishedPodcast, Voice};
use crate::infrastructure::repositories::{PublicationRepository, StorageRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Deterministic object key for a newsletter's podcast
pub fn storage_key(newsletter_id: &str) -> String {
    format!("podcasts/newsletter_{}.mp3", newsletter_id)
}

pub struct PodcastService {
    generator: Arc<PodcastGenerator>,
    storage_repo: Arc<dyn StorageRepository>,
    publication_repo: Arc<dyn PublicationRepository>,
}

impl PodcastService {
    pub fn new(
        generator: Arc<PodcastGenerator>,
        storage_repo: Arc<dyn StorageRepository>,
        publication_repo: Arc<dyn PublicationRepository>,
    ) -> Self {
        Self {
            generator,
            storage_repo,
            publication_repo,
        }
    }
}

#[async_trait]
pub trait PodcastServiceApi: Send + Sync {
    /// Run the full pipeline for one newsletter
    ///
    /// This operation:
    /// - Drafts a monologue script from the newsletter
    /// - Synthesizes it, falling back to the alternate profile once
    /// - Uploads the audio under `podcasts/newsletter_{id}.mp3`
    /// - Records the URL on the newsletter row (failure is logged, not returned)
    async fn publish(&self, request: JobRequest) -> Result<PublishedPodcast, PodcastServiceError>;

    /// List voices available for synthesis
    async fn available_voices(&self) -> Result<Vec<Voice>, PodcastServiceError>;
}

#[async_trait]
impl PodcastServiceApi for PodcastService {
    async fn publish(&self, request: JobRequest) -> Result<PublishedPodcast, PodcastServiceError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            newsletter_id = %request.newsletter_id,
            voice_id = %request.voice_id,
            target_duration_minutes = request.target_duration_minutes,
            newsletter_length = request.newsletter_text.len(),
            "Podcast job started"
        );

        request.validate()?;

        // 1-2. Draft and synthesize
        let draft = self.generator.produce(&request).await?;

        // 3. Publish the asset
        let key = storage_key(&request.newsletter_id);
        let podcast_url = self
            .storage_repo
            .put(&key, draft.audio)
            .await
            .map_err(PodcastServiceError::Storage)?;

        // 4. Record it; the asset exists either way
        let record_updated = match self
            .publication_repo
            .record_podcast_url(&request.newsletter_id, &podcast_url)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    newsletter_id = %request.newsletter_id,
                    podcast_url = %podcast_url,
                    error = %e,
                    "Error updating publication record"
                );
                false
            }
        };

        tracing::info!(
            newsletter_id = %request.newsletter_id,
            podcast_url = %podcast_url,
            record_updated = record_updated,
            script_length = draft.script.len(),
            latency_ms = start_time.elapsed().as_millis(),
            "Podcast job finished"
        );

        Ok(PublishedPodcast {
            podcast_url,
            record_updated,
        })
    }

    async fn available_voices(&self) -> Result<Vec<Voice>, PodcastServiceError> {
        self.generator.voices().await
    }
}
