use super::error::PodcastServiceError;
use crate::infrastructure::repositories::TtsRepository;
use std::sync::Arc;
use std::time::Duration;

/// Payloads below this size are provider error bodies mislabeled as audio
pub const MIN_AUDIO_BYTES: usize = 1000;

/// A named bundle of speech settings tried as one synthesis attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisProfile {
    pub name: &'static str,
    pub model_id: &'static str,
    pub stability: f32,
    pub similarity_boost: f32,
}

pub const PRIMARY_PROFILE: SynthesisProfile = SynthesisProfile {
    name: "primary",
    model_id: "eleven_monolingual_v1",
    stability: 0.5,
    similarity_boost: 0.5,
};

/// Broader model for voices the primary model rejects
pub const FALLBACK_PROFILE: SynthesisProfile = SynthesisProfile {
    name: "fallback",
    model_id: "eleven_multilingual_v2",
    stability: 0.7,
    similarity_boost: 0.75,
};

pub const DEFAULT_PROFILES: [SynthesisProfile; 2] = [PRIMARY_PROFILE, FALLBACK_PROFILE];

/// Second pipeline stage: speaks the script, walking the profile list on failure
pub struct SpeechSynthesizer {
    tts_repo: Arc<dyn TtsRepository>,
    profiles: Vec<SynthesisProfile>,
    cooldown: Duration,
}

impl SpeechSynthesizer {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, cooldown: Duration) -> Self {
        Self::with_profiles(tts_repo, DEFAULT_PROFILES.to_vec(), cooldown)
    }

    pub fn with_profiles(
        tts_repo: Arc<dyn TtsRepository>,
        profiles: Vec<SynthesisProfile>,
        cooldown: Duration,
    ) -> Self {
        Self {
            tts_repo,
            profiles,
            cooldown,
        }
    }

    pub fn tts_repo(&self) -> &Arc<dyn TtsRepository> {
        &self.tts_repo
    }

    /// Synthesize `text`, trying each profile in order with the cooldown between attempts.
    ///
    /// A successful but undersized payload is fatal and is not retried.
    pub async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
    ) -> Result<Vec<u8>, PodcastServiceError> {
        let mut last_error = "no synthesis profiles configured".to_string();

        for (attempt, profile) in self.profiles.iter().enumerate() {
            if attempt > 0 {
                tracing::warn!(
                    attempt = attempt + 1,
                    profile = profile.name,
                    cooldown_secs = self.cooldown.as_secs_f64(),
                    "Retrying synthesis after cooldown"
                );
                tokio::time::sleep(self.cooldown).await;
            }

            match self.tts_repo.synthesize(text, voice_id, profile).await {
                Ok(audio) => return Self::check_payload(audio, profile),
                Err(e) => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        profile = profile.name,
                        voice_id = voice_id,
                        error = %e,
                        "Synthesis attempt failed"
                    );
                    last_error = e;
                }
            }
        }

        tracing::error!(
            attempts = self.profiles.len(),
            voice_id = voice_id,
            error = %last_error,
            "All synthesis profiles failed"
        );
        Err(PodcastServiceError::Synthesis(last_error))
    }

    fn check_payload(
        audio: Vec<u8>,
        profile: &SynthesisProfile,
    ) -> Result<Vec<u8>, PodcastServiceError> {
        if audio.len() < MIN_AUDIO_BYTES {
            tracing::error!(
                audio_size_bytes = audio.len(),
                min_audio_bytes = MIN_AUDIO_BYTES,
                profile = profile.name,
                "Synthesized audio is suspiciously small"
            );
            return Err(PodcastServiceError::SuspiciousAudio(audio.len()));
        }

        tracing::info!(
            audio_size_bytes = audio.len(),
            profile = profile.name,
            "Speech synthesized"
        );
        Ok(audio)
    }
}
