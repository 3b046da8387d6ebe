use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newsletter_podcast::controllers::podcast::PodcastController;
use newsletter_podcast::domain::podcast::{
    handle_event, LocalArtifacts, PodcastGenerator, PodcastService, PodcastServiceApi,
    ScriptDrafter, SpeechSynthesizer,
};
use newsletter_podcast::infrastructure::config::{Config, LogFormat, StorageBackend};
use newsletter_podcast::infrastructure::http::start_http_server;
use newsletter_podcast::infrastructure::repositories::{
    DisabledPublicationRepository, ElevenLabsTtsRepository, LocalStorageRepository,
    OpenAiCompletionRepository, PublicationRepository, S3StorageRepository, StorageRepository,
    SupabasePublicationRepository,
};

#[derive(Debug, Parser)]
#[command(name = "newsletter-podcast", about = "Turn newsletters into spoken podcasts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the event endpoint over HTTP
    Serve,
    /// Draft and synthesize a podcast locally, without publishing it
    Generate {
        /// Newsletter text file, or `-` for stdin
        #[arg(long)]
        newsletter_file: PathBuf,
        /// Target length in minutes
        #[arg(long, default_value_t = 10.0)]
        duration: f64,
        /// Speech provider voice id
        #[arg(long)]
        voice: String,
    },
    /// Run one publishing event from a JSON file, or `-` for stdin
    Publish {
        #[arg(long)]
        event: PathBuf,
    },
    /// List the voices available to the configured speech account
    Voices,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    match cli.command {
        Command::Serve => {
            tracing::info!(
                "Starting newsletter podcast service on {}:{}",
                config.host,
                config.port
            );
            let service = build_service(&config).await?;
            let config = Arc::new(config);
            let podcast_controller = Arc::new(PodcastController::new(service));
            start_http_server(config, podcast_controller).await?;
        }
        Command::Generate {
            newsletter_file,
            duration,
            voice,
        } => {
            let newsletter_text = read_input(&newsletter_file).await?;
            let generator = build_generator(&config);
            let podcast = generator
                .generate(&newsletter_text, duration, &voice)
                .await?;
            println!("Podcast generation complete!");
            println!("Transcript saved at: {}", podcast.transcript_path.display());
            println!("Audio saved at: {}", podcast.audio_path.display());
        }
        Command::Publish { event } => {
            let payload: serde_json::Value = serde_json::from_str(&read_input(&event).await?)?;
            let service = build_service(&config).await?;
            let response = handle_event(service.as_ref(), payload).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
            if !response.is_success() {
                std::process::exit(1);
            }
        }
        Command::Voices => {
            // Listing voices needs the speech provider only, not the publishing backends
            let generator = build_generator(&config);
            for voice in generator.voices().await? {
                println!("{}\t{}", voice.voice_id, voice.name);
            }
        }
    }

    Ok(())
}

/// Drafting and synthesis stages; needs only the two provider keys
fn build_generator(config: &Config) -> PodcastGenerator {
    let openai_client = Arc::new(OpenAiCompletionRepository::client_from_key(
        &config.openai_api_key,
        config.openai_base_url.as_deref(),
    ));
    let completion_repo = Arc::new(OpenAiCompletionRepository::new(
        openai_client,
        config.openai_model.clone(),
    ));
    let tts_repo = Arc::new(ElevenLabsTtsRepository::new(
        config.elevenlabs_api_key.clone(),
        config.elevenlabs_base_url.clone(),
    ));

    PodcastGenerator::new(
        ScriptDrafter::new(completion_repo),
        SpeechSynthesizer::new(tts_repo, config.synthesis_cooldown()),
        LocalArtifacts::new(config.artifacts_dir.clone()),
        config.artifact_write_through,
    )
}

/// Full pipeline with the configured storage and datastore backends
async fn build_service(
    config: &Config,
) -> Result<Arc<dyn PodcastServiceApi>, Box<dyn std::error::Error>> {
    let storage_repo: Arc<dyn StorageRepository> = match config.storage_backend {
        StorageBackend::S3 => {
            let bucket = config.require_s3_bucket()?.to_string();
            tracing::info!(region = %config.aws_region, bucket = %bucket, "Initializing S3 client");

            let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(config.aws_region.clone()))
                .load()
                .await;
            let s3_client = Arc::new(aws_sdk_s3::Client::new(&aws_config));
            Arc::new(S3StorageRepository::new(s3_client, bucket))
        }
        StorageBackend::Local => {
            tracing::info!(root = %config.artifacts_dir.display(), "Using local podcast storage");
            Arc::new(LocalStorageRepository::new(config.artifacts_dir.clone()))
        }
    };

    let publication_repo: Arc<dyn PublicationRepository> = match config.supabase_credentials() {
        Some((url, key)) => Arc::new(SupabasePublicationRepository::new(
            url.to_string(),
            key.to_string(),
        )),
        None => {
            tracing::warn!("SUPABASE_URL/SUPABASE_KEY not set, publication records will not be updated");
            Arc::new(DisabledPublicationRepository)
        }
    };

    Ok(Arc::new(PodcastService::new(
        Arc::new(build_generator(config)),
        storage_repo,
        publication_repo,
    )))
}

async fn read_input(path: &Path) -> Result<String, std::io::Error> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        tokio::io::stdin().read_to_string(&mut input).await?;
        Ok(input)
    } else {
        tokio::fs::read_to_string(path).await
    }
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "newsletter_podcast=debug,tower_http=debug"
    } else {
        "newsletter_podcast=info,tower_http=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
