use async_trait::async_trait;

/// Repository for publication records.
/// Abstracts the datastore row that links a newsletter to its podcast
#[async_trait]
pub trait PublicationRepository: Send + Sync {
    /// Set the podcast URL on the newsletter record (partial update, no read-back)
    async fn record_podcast_url(&self, newsletter_id: &str, podcast_url: &str)
        -> Result<(), String>;
}

/// Backend used when no datastore is configured; every update fails
pub struct DisabledPublicationRepository;

#[async_trait]
impl PublicationRepository for DisabledPublicationRepository {
    async fn record_podcast_url(&self, newsletter_id: &str, _: &str) -> Result<(), String> {
        Err(format!(
            "no datastore configured, newsletter {} not updated",
            newsletter_id
        ))
    }
}
