use super::storage_repository::StorageRepository;
use async_trait::async_trait;
use aws_sdk_s3::{primitives::ByteStream, Client as S3Client};
use std::sync::Arc;

/// AWS S3 implementation of the storage repository
pub struct S3StorageRepository {
    s3_client: Arc<S3Client>,
    bucket: String,
}

impl S3StorageRepository {
    pub fn new(s3_client: Arc<S3Client>, bucket: String) -> Self {
        Self { s3_client, bucket }
    }

    /// Public virtual-hosted URL of an object in this bucket
    pub fn public_url(&self, key: &str) -> String {
        format!("https://{}.s3.amazonaws.com/{}", self.bucket, key)
    }
}

#[async_trait]
impl StorageRepository for S3StorageRepository {
    async fn put(&self, key: &str, audio: Vec<u8>) -> Result<String, String> {
        let start_time = std::time::Instant::now();
        let size = audio.len();

        tracing::info!(
            bucket = %self.bucket,
            key = key,
            audio_size_bytes = size,
            "Uploading podcast to S3"
        );

        self.s3_client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type("audio/mpeg")
            .body(ByteStream::from(audio))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    bucket = %self.bucket,
                    key = key,
                    "S3 put_object failed"
                );
                format!("S3 upload error: {}", e)
            })?;

        tracing::info!(
            provider = "s3",
            bucket = %self.bucket,
            key = key,
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = size,
            "Podcast uploaded"
        );

        Ok(self.public_url(key))
    }
}
