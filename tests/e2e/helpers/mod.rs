use newsletter_podcast::domain::podcast::{
    LocalArtifacts, PodcastGenerator, PodcastService, ScriptDrafter, SpeechSynthesizer,
};
use newsletter_podcast::infrastructure::config::{Config, Environment, LogFormat, StorageBackend};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;


use fakes::{
    FakeCompletionRepository, FakePublicationRepository, FakeStorageRepository,
    FakeTtsRepository,
};

pub const TEST_BUCKET: &str = "test-podcasts";
pub const TEST_COOLDOWN: Duration = Duration::from_millis(50);

/// Audio payload big enough to pass the small-payload guard
pub fn plausible_audio() -> Vec<u8> {
    let mut audio = vec![0xFF, 0xFB, 0x90, 0x00];
    audio.resize(50_000, 0x55);
    audio
}

/// A wired pipeline over in-memory fakes and a scratch directory
pub struct TestContext {
    pub service: Arc<PodcastService>,
    pub generator: Arc<PodcastGenerator>,
    pub completion: Arc<FakeCompletionRepository>,
    pub tts: Arc<FakeTtsRepository>,
    pub storage: Arc<FakeStorageRepository>,
    pub publications: Arc<FakePublicationRepository>,
    pub artifacts: LocalArtifacts,
    _scratch: TempDir,
}

impl TestContext {
    pub fn new(
        completion: FakeCompletionRepository,
        tts: FakeTtsRepository,
        storage: FakeStorageRepository,
        publications: FakePublicationRepository,
    ) -> Self {
        Self::with_write_through(completion, tts, storage, publications, true)
    }

    pub fn with_write_through(
        completion: FakeCompletionRepository,
        tts: FakeTtsRepository,
        storage: FakeStorageRepository,
        publications: FakePublicationRepository,
        write_through: bool,
    ) -> Self {
        let scratch = tempfile::tempdir().expect("Failed to create scratch dir");
        let artifacts = LocalArtifacts::new(scratch.path());

        let completion = Arc::new(completion);
        let tts = Arc::new(tts);
        let storage = Arc::new(storage);
        let publications = Arc::new(publications);

        let generator = Arc::new(PodcastGenerator::new(
            ScriptDrafter::new(completion.clone()),
            SpeechSynthesizer::new(tts.clone(), TEST_COOLDOWN),
            artifacts.clone(),
            write_through,
        ));
        let service = Arc::new(PodcastService::new(
            generator.clone(),
            storage.clone(),
            publications.clone(),
        ));

        Self {
            service,
            generator,
            completion,
            tts,
            storage,
            publications,
            artifacts,
            _scratch: scratch,
        }
    }

    /// Completion says "Hello world", synthesis returns the given payloads in order
    pub fn scripted(tts_responses: Vec<Result<Vec<u8>, String>>) -> Self {
        Self::new(
            FakeCompletionRepository::replying("Hello world"),
            FakeTtsRepository::scripted(tts_responses),
            FakeStorageRepository::s3_like(TEST_BUCKET),
            FakePublicationRepository::succeeding(),
        )
    }
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
        openai_api_key: "sk-test".to_string(),
        openai_model: "gpt-4".to_string(),
        openai_base_url: None,
        elevenlabs_api_key: "xi-test".to_string(),
        elevenlabs_base_url: "http://localhost:9999".to_string(),
        synthesis_cooldown_secs: 0,
        storage_backend: StorageBackend::S3,
        s3_bucket_name: Some(TEST_BUCKET.to_string()),
        aws_region: "us-east-1".to_string(),
        supabase_url: None,
        supabase_key: None,
        artifacts_dir: PathBuf::from("/tmp"),
        artifact_write_through: false,
    }
}
