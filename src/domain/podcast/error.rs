use crate::error::AppError;

/// Failure of a pipeline run, named after the stage that failed
#[derive(Debug, thiserror::Error)]
pub enum PodcastServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("script drafting failed: {0}")]
    Drafting(String),
    #[error("speech synthesis failed: {0}")]
    Synthesis(String),
    #[error("speech synthesis returned a suspiciously small payload ({0} bytes)")]
    SuspiciousAudio(usize),
    #[error("asset publishing failed: {0}")]
    Storage(String),
    #[error("voice listing failed: {0}")]
    Voices(String),
    #[error("artifact write failed: {0:#}")]
    Artifact(#[from] anyhow::Error),
}

impl From<PodcastServiceError> for AppError {
    fn from(err: PodcastServiceError) -> Self {
        match err {
            PodcastServiceError::Invalid(msg) => AppError::BadRequest(msg),
            PodcastServiceError::Storage(msg) => AppError::Storage(msg),
            PodcastServiceError::Drafting(_)
            | PodcastServiceError::Synthesis(_)
            | PodcastServiceError::SuspiciousAudio(_)
            | PodcastServiceError::Voices(_) => AppError::ExternalService(err.to_string()),
            PodcastServiceError::Artifact(e) => AppError::Internal(format!("{:#}", e)),
        }
    }
}
