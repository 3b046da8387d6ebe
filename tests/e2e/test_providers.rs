use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use newsletter_podcast::domain::podcast::script::build_prompt;
use newsletter_podcast::domain::podcast::synthesis::{FALLBACK_PROFILE, PRIMARY_PROFILE};
use newsletter_podcast::domain::podcast::CompletionOptions;
use newsletter_podcast::infrastructure::repositories::{
    CompletionRepository, ElevenLabsTtsRepository, OpenAiCompletionRepository,
    PublicationRepository, S3StorageRepository, StorageRepository,
    SupabasePublicationRepository, TtsRepository,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_s3_client(endpoint: &str) -> aws_sdk_s3::Client {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .endpoint_url(endpoint)
        .force_path_style(true)
        .credentials_provider(Credentials::new("test", "test", None, None, "test"))
        .build();

    aws_sdk_s3::Client::from_conf(config)
}

fn openai_repository(server: &MockServer) -> OpenAiCompletionRepository {
    let client = OpenAiCompletionRepository::client_from_key("sk-test", Some(&server.uri()));
    OpenAiCompletionRepository::new(Arc::new(client), "gpt-4".to_string())
}

#[tokio::test]
async fn it_should_draft_with_openai_chat_completion() {
    let server = MockServer::start().await;
    let prompt = build_prompt("Rust 2024 ships.", 2.0);

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4",
            "messages": [
                { "role": "system", "content": prompt.system },
                { "role": "user", "content": prompt.user }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt-4",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "Hi, I'm Axon." },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let script = openai_repository(&server)
        .complete(&prompt, &CompletionOptions::drafting())
        .await
        .unwrap();

    assert_eq!(script, "Hi, I'm Axon.");
}

#[tokio::test]
async fn it_should_surface_openai_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "message": "The model `gpt-4` does not exist",
                "type": "invalid_request_error",
                "param": null,
                "code": "model_not_found"
            }
        })))
        .mount(&server)
        .await;

    let err = openai_repository(&server)
        .complete(&build_prompt("News.", 1.0), &CompletionOptions::drafting())
        .await
        .unwrap_err();

    assert!(err.contains("does not exist"));
}

#[tokio::test]
async fn it_should_send_elevenlabs_synthesis_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/v1"))
        .and(header("xi-api-key", "xi-test"))
        .and(header("accept", "audio/mpeg"))
        .and(body_json(json!({
            "text": "Hello world",
            "model_id": "eleven_monolingual_v1",
            "voice_settings": { "stability": 0.5, "similarity_boost": 0.5 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![7u8; 2048], "audio/mpeg"))
        .expect(1)
        .mount(&server)
        .await;

    let repo = ElevenLabsTtsRepository::new("xi-test".to_string(), server.uri());
    let audio = repo
        .synthesize("Hello world", "v1", &PRIMARY_PROFILE)
        .await
        .unwrap();

    assert_eq!(audio, vec![7u8; 2048]);
}

#[tokio::test]
async fn it_should_reject_elevenlabs_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/v1"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({ "detail": { "status": "model_not_supported" } })),
        )
        .mount(&server)
        .await;

    let repo = ElevenLabsTtsRepository::new("xi-test".to_string(), server.uri());
    let err = repo
        .synthesize("Hello world", "v1", &FALLBACK_PROFILE)
        .await
        .unwrap_err();

    assert!(err.contains("422"));
    assert!(err.contains("model_not_supported"));
}

#[tokio::test]
async fn it_should_reject_elevenlabs_success_without_audio() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/v1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "detail": "quota_exceeded" })),
        )
        .mount(&server)
        .await;

    let repo = ElevenLabsTtsRepository::new("xi-test".to_string(), server.uri());
    let err = repo
        .synthesize("Hello world", "v1", &PRIMARY_PROFILE)
        .await
        .unwrap_err();

    assert!(err.contains("non-audio"));
}

#[tokio::test]
async fn it_should_list_elevenlabs_voices() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .and(header("xi-api-key", "xi-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "voices": [
                { "voice_id": "pqHfZKP75CvOlQylNhV4", "name": "Bill", "category": "premade" },
                { "voice_id": "21m00Tcm4TlvDq8ikWAM", "name": "Rachel" }
            ]
        })))
        .mount(&server)
        .await;

    let repo = ElevenLabsTtsRepository::new("xi-test".to_string(), server.uri());
    let voices = repo.list_voices().await.unwrap();

    let names: Vec<&str> = voices.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Bill", "Rachel"]);
    assert_eq!(voices[0].voice_id, "pqHfZKP75CvOlQylNhV4");
}

#[tokio::test]
async fn it_should_patch_supabase_newsletter_row() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/newsletters"))
        .and(query_param("id", "eq.42"))
        .and(header("apikey", "service-key"))
        .and(header("authorization", "Bearer service-key"))
        .and(body_json(json!({
            "podcast_url": "https://b.s3.amazonaws.com/podcasts/newsletter_42.mp3"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let repo = SupabasePublicationRepository::new(server.uri(), "service-key".to_string());
    repo.record_podcast_url("42", "https://b.s3.amazonaws.com/podcasts/newsletter_42.mp3")
        .await
        .unwrap();
}

#[tokio::test]
async fn it_should_report_supabase_rejections() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/newsletters"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid API key" })),
        )
        .mount(&server)
        .await;

    let repo = SupabasePublicationRepository::new(server.uri(), "wrong".to_string());
    let err = repo
        .record_podcast_url("42", "https://b.s3.amazonaws.com/x.mp3")
        .await
        .unwrap_err();

    assert!(err.contains("401"));
    assert!(err.contains("Invalid API key"));
}

#[tokio::test]
async fn it_should_upload_to_s3_and_return_public_url() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/podcasts-bucket/podcasts/newsletter_42.mp3"))
        .and(header("content-type", "audio/mpeg"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let repo = S3StorageRepository::new(
        Arc::new(mock_s3_client(&server.uri())),
        "podcasts-bucket".to_string(),
    );
    let url = repo
        .put("podcasts/newsletter_42.mp3", vec![0x55; 4096])
        .await
        .unwrap();

    assert_eq!(
        url,
        "https://podcasts-bucket.s3.amazonaws.com/podcasts/newsletter_42.mp3"
    );
}

#[tokio::test]
async fn it_should_fail_when_s3_rejects_upload() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(403).set_body_raw(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Error><Code>AccessDenied</Code><Message>Access Denied</Message></Error>",
            "application/xml",
        ))
        .mount(&server)
        .await;

    let repo = S3StorageRepository::new(
        Arc::new(mock_s3_client(&server.uri())),
        "podcasts-bucket".to_string(),
    );
    let result = repo.put("podcasts/newsletter_42.mp3", vec![0x55; 4096]).await;

    assert!(result.is_err());
}
