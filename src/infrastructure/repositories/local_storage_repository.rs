use super::storage_repository::StorageRepository;
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

/// Filesystem implementation of the storage repository, for running without AWS
pub struct LocalStorageRepository {
    root: PathBuf,
}

impl LocalStorageRepository {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve a key under the root; keys may only descend into it
    fn resolve(&self, key: &str) -> Result<PathBuf, String> {
        let escapes = Path::new(key).components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes || key.is_empty() {
            return Err(format!("Storage key escapes the storage root: {}", key));
        }
        Ok(self.root.join(key))
    }
}

/// `file://` URL with every path segment percent-encoded
fn file_url(path: &Path) -> String {
    let segments: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(segment) => {
                Some(urlencoding::encode(&segment.to_string_lossy()).into_owned())
            }
            _ => None,
        })
        .collect();
    format!("file:///{}", segments.join("/"))
}

#[async_trait]
impl StorageRepository for LocalStorageRepository {
    async fn put(&self, key: &str, audio: Vec<u8>) -> Result<String, String> {
        let path = self.resolve(key).map_err(|e| {
            tracing::error!(key = key, root = %self.root.display(), "Rejected storage key");
            e
        })?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }

        tokio::fs::write(&path, &audio)
            .await
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

        let absolute = tokio::fs::canonicalize(&path)
            .await
            .map_err(|e| format!("Failed to resolve {}: {}", path.display(), e))?;

        tracing::info!(
            path = %absolute.display(),
            audio_size_bytes = audio.len(),
            "Podcast stored locally"
        );

        Ok(file_url(&absolute))
    }
}
