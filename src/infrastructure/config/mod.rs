use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
const DEFAULT_ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io";
const DEFAULT_SYNTHESIS_COOLDOWN_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Completion provider
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: Option<String>,
    // Speech provider
    pub elevenlabs_api_key: String,
    pub elevenlabs_base_url: String,
    pub synthesis_cooldown_secs: u64,
    // Object storage
    pub storage_backend: StorageBackend,
    pub s3_bucket_name: Option<String>,
    pub aws_region: String,
    // Datastore
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    // Local artifacts
    pub artifacts_dir: PathBuf,
    pub artifact_write_through: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    S3,
    Local,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|_| "OPENAI_API_KEY must be set")?,
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: non_empty_var("OPENAI_BASE_URL"),
            elevenlabs_api_key: env::var("ELEVENLABS_API_KEY")
                .map_err(|_| "ELEVENLABS_API_KEY must be set")?,
            elevenlabs_base_url: env::var("ELEVENLABS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ELEVENLABS_BASE_URL.to_string()),
            synthesis_cooldown_secs: env::var("SYNTHESIS_COOLDOWN_SECS")
                .unwrap_or_else(|_| DEFAULT_SYNTHESIS_COOLDOWN_SECS.to_string())
                .parse()?,
            storage_backend: match env::var("STORAGE_BACKEND")
                .unwrap_or_else(|_| "s3".to_string())
                .to_lowercase()
                .as_str()
            {
                "s3" => StorageBackend::S3,
                "local" => StorageBackend::Local,
                other => return Err(format!("unknown STORAGE_BACKEND: {}", other).into()),
            },
            s3_bucket_name: non_empty_var("S3_BUCKET_NAME"),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            supabase_url: non_empty_var("SUPABASE_URL"),
            supabase_key: non_empty_var("SUPABASE_KEY"),
            artifacts_dir: non_empty_var("ARTIFACTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(env::temp_dir),
            artifact_write_through: env::var("ARTIFACT_WRITE_THROUGH")
                .map(|s| s.to_lowercase() != "false")
                .unwrap_or(true),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn synthesis_cooldown(&self) -> Duration {
        Duration::from_secs(self.synthesis_cooldown_secs)
    }

    /// Bucket name for the S3 backend; only required once something is published
    pub fn require_s3_bucket(&self) -> Result<&str, Box<dyn std::error::Error>> {
        self.s3_bucket_name
            .as_deref()
            .ok_or_else(|| "S3_BUCKET_NAME must be set when STORAGE_BACKEND is s3".into())
    }

    /// Datastore credentials, present only when both URL and key are configured
    pub fn supabase_credentials(&self) -> Option<(&str, &str)> {
        match (&self.supabase_url, &self.supabase_key) {
            (Some(url), Some(key)) => Some((url.as_str(), key.as_str())),
            _ => None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
