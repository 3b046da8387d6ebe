use async_trait::async_trait;

/// Repository for durable audio storage.
/// Abstracts the underlying object store (AWS S3, local directory)
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// Store an MP3 payload under `key`, replacing any existing object
    ///
    /// Returns the public URL of the stored object
    async fn put(&self, key: &str, audio: Vec<u8>) -> Result<String, String>;
}
