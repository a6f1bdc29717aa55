use async_openai::error::OpenAIError;
use async_trait::async_trait;
use shared::models::Personality;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Missing API key")]
    MissingApiKey,
    #[error("Model API error: {0}")]
    Api(#[from] OpenAIError),
    #[error("Model returned an empty reply")]
    EmptyReply,
}

/// Connection settings for the hosted model
#[derive(Clone, Debug, PartialEq)]
pub struct ModelConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.9,
        }
    }
}

/// Something that can answer a user message in a given personality
#[async_trait]
pub trait ReplyModel: Send + Sync {
    async fn reply(&self, personality: Personality, message: &str) -> ModelResult<String>;
}
