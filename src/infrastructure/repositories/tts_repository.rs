use crate::domain::podcast::{SynthesisProfile, Voice};
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (ElevenLabs, etc.)
///
/// Implementations are responsible for:
/// - Mapping a synthesis profile onto provider-specific settings
/// - Rejecting responses that do not carry audio
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text with one voice and one settings profile
    ///
    /// Returns the audio payload as delivered by the provider (MP3 format)
    ///
    /// # Arguments
    /// * `text` - The monologue to speak
    /// * `voice_id` - Provider voice identifier
    /// * `profile` - Model and voice settings for this attempt
    ///
    /// # Errors
    /// Returns error on a non-success status, a transport failure or a non-audio body
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        profile: &SynthesisProfile,
    ) -> Result<Vec<u8>, String>;

    /// List the voices available to the configured account
    async fn list_voices(&self) -> Result<Vec<Voice>, String>;
}
