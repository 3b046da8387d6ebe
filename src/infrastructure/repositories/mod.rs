pub mod completion_repository;
pub mod elevenlabs_tts_repository;
pub mod local_storage_repository;
pub mod openai_completion_repository;
pub mod publication_repository;
pub mod s3_storage_repository;
pub mod storage_repository;
pub mod supabase_publication_repository;
pub mod tts_repository;

pub use completion_repository::CompletionRepository;
pub use elevenlabs_tts_repository::ElevenLabsTtsRepository;
pub use local_storage_repository::LocalStorageRepository;
pub use openai_completion_repository::OpenAiCompletionRepository;
pub use publication_repository::{DisabledPublicationRepository, PublicationRepository};
pub use s3_storage_repository::S3StorageRepository;
pub use storage_repository::StorageRepository;
pub use supabase_publication_repository::SupabasePublicationRepository;
pub use tts_repository::TtsRepository;
