use super::artifacts::LocalArtifacts;
use super::error::PodcastServiceError;
use super::script::ScriptDrafter;
use super::synthesis::SpeechSynthesizer;
use super::{validate_inputs, GeneratedPodcast, JobRequest, PodcastDraft, Voice};

/// Drafting and synthesis stages, without any publishing backend.
///
/// Script and audio stay in memory; `artifacts` receives a write-through copy
/// when `write_through` is set, and always for [`PodcastGenerator::generate`].
pub struct PodcastGenerator {
    drafter: ScriptDrafter,
    synthesizer: SpeechSynthesizer,
    artifacts: LocalArtifacts,
    write_through: bool,
}

impl PodcastGenerator {
    pub fn new(
        drafter: ScriptDrafter,
        synthesizer: SpeechSynthesizer,
        artifacts: LocalArtifacts,
        write_through: bool,
    ) -> Self {
        Self {
            drafter,
            synthesizer,
            artifacts,
            write_through,
        }
    }

    /// Direct-call entry point: draft, speak and keep both on disk
    pub async fn generate(
        &self,
        newsletter_text: &str,
        target_duration_minutes: f64,
        voice_id: &str,
    ) -> Result<GeneratedPodcast, PodcastServiceError> {
        validate_inputs(newsletter_text, target_duration_minutes, voice_id)?;

        let script = self
            .drafter
            .draft(newsletter_text, target_duration_minutes)
            .await?;
        let transcript_path = self.artifacts.write_transcript(&script).await?;

        let audio = self.synthesizer.synthesize(&script, voice_id).await?;
        let audio_path = self.artifacts.write_audio(&audio).await?;

        tracing::info!(
            transcript_path = %transcript_path.display(),
            audio_path = %audio_path.display(),
            "Podcast generated"
        );

        Ok(GeneratedPodcast {
            monologue_text: script,
            transcript_path,
            audio_path,
        })
    }

    /// Stages 1 and 2 of a publishing run
    pub async fn produce(&self, request: &JobRequest) -> Result<PodcastDraft, PodcastServiceError> {
        let script = self
            .drafter
            .draft(&request.newsletter_text, request.target_duration_minutes)
            .await?;
        if self.write_through {
            self.artifacts.write_transcript(&script).await?;
        }

        let audio = self
            .synthesizer
            .synthesize(&script, &request.voice_id)
            .await?;
        if self.write_through {
            self.artifacts.write_audio(&audio).await?;
        }

        Ok(PodcastDraft { script, audio })
    }

    /// Voices offered by the speech provider
    pub async fn voices(&self) -> Result<Vec<Voice>, PodcastServiceError> {
        self.synthesizer
            .tts_repo()
            .list_voices()
            .await
            .map_err(PodcastServiceError::Voices)
    }
}
