use super::completion_repository::CompletionRepository;
use crate::domain::podcast::{CompletionOptions, ScriptPrompt};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI chat completions implementation of the completion repository
pub struct OpenAiCompletionRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiCompletionRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }

    /// Build a client from an API key and an optional base URL override
    pub fn client_from_key(api_key: &str, base_url: Option<&str>) -> Client<OpenAIConfig> {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(base_url) = base_url {
            config = config.with_api_base(base_url);
        }
        Client::with_config(config)
    }

    fn build_request(
        &self,
        prompt: &ScriptPrompt,
        options: &CompletionOptions,
    ) -> Result<CreateChatCompletionRequest, String> {
        let system = ChatCompletionRequestSystemMessageArgs::default()
            .content(prompt.system.as_str())
            .build()
            .map_err(|e| format!("Invalid system message: {}", e))?;
        let user = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt.user.as_str())
            .build()
            .map_err(|e| format!("Invalid user message: {}", e))?;

        let messages: Vec<ChatCompletionRequestMessage> = vec![system.into(), user.into()];

        let mut builder = CreateChatCompletionRequestArgs::default();
        builder
            .model(self.model.as_str())
            .messages(messages)
            .temperature(options.temperature);

        if let Some(penalty) = options.presence_penalty {
            builder.presence_penalty(penalty);
        }
        if let Some(penalty) = options.frequency_penalty {
            builder.frequency_penalty(penalty);
        }

        builder
            .build()
            .map_err(|e| format!("Invalid completion request: {}", e))
    }
}

#[async_trait]
impl CompletionRepository for OpenAiCompletionRepository {
    async fn complete(
        &self,
        prompt: &ScriptPrompt,
        options: &CompletionOptions,
    ) -> Result<String, String> {
        let start_time = std::time::Instant::now();
        let request = self.build_request(prompt, options)?;

        tracing::info!(
            model = %self.model,
            temperature = options.temperature,
            prompt_length = prompt.user.len(),
            "Calling OpenAI chat completion"
        );

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                "OpenAI chat completion failed"
            );
            format!("OpenAI completion error: {}", e)
        })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| "OpenAI completion returned no content".to_string())?;

        tracing::info!(
            provider = "openai",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            completion_length = content.len(),
            "Chat completion finished"
        );

        Ok(content)
    }
}
