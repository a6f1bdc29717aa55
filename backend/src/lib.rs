mod handlers;
mod model;
mod openai;

pub use crate::handlers::FAILURE_TEXT;
pub use crate::model::{
    DEFAULT_API_BASE, DEFAULT_MODEL, ModelConfig, ModelError, ModelResult, ReplyModel,
};
pub use crate::openai::{OpenAiModel, build_prompt, personality_instruction};

use crate::handlers::chat_reply;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ReplyModel>,
}

impl AppState {
    pub fn new(model: Arc<dyn ReplyModel>) -> Self {
        Self { model }
    }

    /// State backed by the hosted model described by `config`
    pub fn from_config(config: ModelConfig) -> Self {
        Self::new(Arc::new(OpenAiModel::new(config)))
    }
}

pub fn init(router: Router<AppState>, state: AppState) -> Router<()> {
    router
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/chat", post(chat_reply))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
