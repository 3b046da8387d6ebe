use super::publication_repository::PublicationRepository;
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, StatusCode};
use serde_json::json;

/// Supabase (PostgREST) implementation of the publication repository
pub struct SupabasePublicationRepository {
    base_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl SupabasePublicationRepository {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            http_client: reqwest::Client::new(),
        }
    }

    fn newsletter_url(&self, newsletter_id: &str) -> String {
        format!(
            "{}/rest/v1/newsletters?id=eq.{}",
            self.base_url,
            urlencoding::encode(newsletter_id)
        )
    }
}

#[async_trait]
impl PublicationRepository for SupabasePublicationRepository {
    async fn record_podcast_url(
        &self,
        newsletter_id: &str,
        podcast_url: &str,
    ) -> Result<(), String> {
        let response = self
            .http_client
            .patch(self.newsletter_url(newsletter_id))
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&json!({ "podcast_url": podcast_url }))
            .send()
            .await
            .map_err(|e| format!("Supabase request error: {}", e))?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => {
                tracing::info!(newsletter_id = newsletter_id, "Supabase updated");
                Ok(())
            }
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(format!(
                    "Supabase returned {}: {}",
                    status.as_u16(),
                    error_text
                ))
            }
        }
    }
}
