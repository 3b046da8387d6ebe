use super::error::PodcastServiceError;
use crate::infrastructure::repositories::CompletionRepository;
use std::sync::Arc;

/// Speaking rate used to turn a duration into a word budget
pub const WORDS_PER_MINUTE: f64 = 150.0;

const PERSONA: &str = "Axon";
const DRAFTING_TEMPERATURE: f32 = 0.7;

const SYSTEM_INSTRUCTIONS: &str = "You are a podcast script writer. You write single-host \
monologues that are read aloud by a text-to-speech engine. Write only the words the host \
speaks: no headings, no bullet points, no speaker labels, no stage directions and no \
markdown.";

/// System + user message pair sent to the completion provider
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptPrompt {
    pub system: String,
    pub user: String,
}

/// Sampling parameters for a completion call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub presence_penalty: Option<f32>,
    pub frequency_penalty: Option<f32>,
}

impl CompletionOptions {
    /// Fixed options for script drafting: moderate creativity, no penalties
    pub fn drafting() -> Self {
        Self {
            temperature: DRAFTING_TEMPERATURE,
            presence_penalty: None,
            frequency_penalty: None,
        }
    }
}

/// Advisory word budget for a podcast of the given length
pub fn target_word_count(duration_minutes: f64) -> u32 {
    (duration_minutes * WORDS_PER_MINUTE).round() as u32
}

/// Build the drafting prompt, embedding the newsletter verbatim
pub fn build_prompt(newsletter_text: &str, duration_minutes: f64) -> ScriptPrompt {
    let word_count = target_word_count(duration_minutes);

    let user = format!(
        "Your name is {persona}. Using the newsletter content below, generate an informative \
monologue podcast script. The final script should be written in natural spoken language \
suitable for text-to-speech conversion and should fit within approximately \
{duration} minutes (around {word_count} words). Do not include headings, bullet points, \
section markers or stage directions. Make sure to include smooth transitions between \
topics, and cover all key points from the newsletter.\n\nNewsletter Content:\n{newsletter}",
        persona = PERSONA,
        duration = duration_minutes,
        word_count = word_count,
        newsletter = newsletter_text,
    );

    ScriptPrompt {
        system: SYSTEM_INSTRUCTIONS.to_string(),
        user,
    }
}

/// First pipeline stage: turns newsletter text into a monologue script
pub struct ScriptDrafter {
    completion_repo: Arc<dyn CompletionRepository>,
}

impl ScriptDrafter {
    pub fn new(completion_repo: Arc<dyn CompletionRepository>) -> Self {
        Self { completion_repo }
    }

    /// Draft a monologue. The word budget is advisory; the output is not checked
    pub async fn draft(
        &self,
        newsletter_text: &str,
        duration_minutes: f64,
    ) -> Result<String, PodcastServiceError> {
        let prompt = build_prompt(newsletter_text, duration_minutes);

        tracing::info!(
            duration_minutes = duration_minutes,
            target_word_count = target_word_count(duration_minutes),
            newsletter_length = newsletter_text.len(),
            "Drafting monologue script"
        );

        let script = self
            .completion_repo
            .complete(&prompt, &CompletionOptions::drafting())
            .await
            .map_err(PodcastServiceError::Drafting)?;

        tracing::info!(
            script_length = script.len(),
            script_words = script.split_whitespace().count(),
            "Monologue script drafted"
        );

        Ok(script)
    }
}
