use super::tts_repository::TtsRepository;
use crate::domain::podcast::{SynthesisProfile, Voice};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

const XI_API_KEY_HEADER: &str = "xi-api-key";

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

#[derive(Debug, Deserialize)]
struct VoicesResponse {
    voices: Vec<VoiceEntry>,
}

#[derive(Debug, Deserialize)]
struct VoiceEntry {
    voice_id: String,
    name: String,
}

/// ElevenLabs implementation of TTS repository
pub struct ElevenLabsTtsRepository {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl ElevenLabsTtsRepository {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    fn speech_url(&self, voice_id: &str) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.base_url,
            urlencoding::encode(voice_id)
        )
    }
}

/// Whether a Content-Type header value announces an audio payload
fn is_audio_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|mime| mime.trim().to_ascii_lowercase().starts_with("audio/"))
        .unwrap_or(false)
}

#[async_trait]
impl TtsRepository for ElevenLabsTtsRepository {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        profile: &SynthesisProfile,
    ) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            voice_id = voice_id,
            profile = profile.name,
            model_id = profile.model_id,
            stability = profile.stability,
            similarity_boost = profile.similarity_boost,
            text_length = text.len(),
            text_preview = %text.chars().take(200).collect::<String>(),
            "Calling ElevenLabs text-to-speech"
        );

        let body = SpeechRequest {
            text,
            model_id: profile.model_id,
            voice_settings: VoiceSettings {
                stability: profile.stability,
                similarity_boost: profile.similarity_boost,
            },
        };

        let response = self
            .http_client
            .post(self.speech_url(voice_id))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "audio/mpeg")
            .header(XI_API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, voice_id = voice_id, "ElevenLabs request failed");
                format!("ElevenLabs request error: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                voice_id = voice_id,
                profile = profile.name,
                error_body = %error_text,
                "ElevenLabs synthesis rejected"
            );
            return Err(format!(
                "ElevenLabs returned {}: {}",
                status.as_u16(),
                error_text
            ));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !is_audio_content_type(&content_type) {
            let body_text = response.text().await.unwrap_or_default();
            tracing::error!(
                content_type = %content_type,
                voice_id = voice_id,
                profile = profile.name,
                "ElevenLabs response is not audio"
            );
            return Err(format!(
                "ElevenLabs returned non-audio content ({}): {}",
                content_type, body_text
            ));
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read ElevenLabs audio: {}", e))?
            .to_vec();

        tracing::info!(
            provider = "elevenlabs",
            profile = profile.name,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            audio_size_bytes = audio_bytes.len(),
            "TTS synthesis completed"
        );

        Ok(audio_bytes)
    }

    async fn list_voices(&self) -> Result<Vec<Voice>, String> {
        let response = self
            .http_client
            .get(format!("{}/v1/voices", self.base_url))
            .header(ACCEPT, "application/json")
            .header(XI_API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| format!("ElevenLabs request error: {}", e))?;

        if !response.status().is_success() {
            return Err(format!(
                "Error fetching voices: {}",
                response.status().as_u16()
            ));
        }

        let voices = response
            .json::<VoicesResponse>()
            .await
            .map_err(|e| format!("Failed to parse ElevenLabs voices: {}", e))?;

        Ok(voices
            .voices
            .into_iter()
            .map(|v| Voice {
                voice_id: v.voice_id,
                name: v.name,
            })
            .collect())
    }
}
