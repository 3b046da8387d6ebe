use anyhow::Context;
use std::path::{Path, PathBuf};

const TRANSCRIPT_DIR: &str = "Podcast_textfile";
const TRANSCRIPT_FILE: &str = "Podcast_Transcript.txt";
const AUDIO_DIR: &str = "Final_Audio";
const AUDIO_FILE: &str = "podcast.mp3";

/// Scratch files for the latest transcript and audio.
/// Fixed paths: each run overwrites the previous one.
#[derive(Debug, Clone)]
pub struct LocalArtifacts {
    root: PathBuf,
}

impl LocalArtifacts {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn transcript_path(&self) -> PathBuf {
        self.root.join(TRANSCRIPT_DIR).join(TRANSCRIPT_FILE)
    }

    pub fn audio_path(&self) -> PathBuf {
        self.root.join(AUDIO_DIR).join(AUDIO_FILE)
    }

    pub async fn write_transcript(&self, script: &str) -> anyhow::Result<PathBuf> {
        let path = self.transcript_path();
        write_file(&path, script.as_bytes()).await?;
        tracing::debug!(path = %path.display(), "Transcript written");
        Ok(path)
    }

    pub async fn write_audio(&self, audio: &[u8]) -> anyhow::Result<PathBuf> {
        let path = self.audio_path();
        write_file(&path, audio).await?;
        tracing::debug!(path = %path.display(), audio_size_bytes = audio.len(), "Audio written");
        Ok(path)
    }
}

async fn write_file(path: &Path, contents: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("writing {}", path.display()))
}
