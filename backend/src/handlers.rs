use crate::AppState;
use axum::{Json, extract::State, http::StatusCode};
use shared::models::{ChatReply, ChatRequest};

/// Body text answered alongside a 500
pub const FAILURE_TEXT: &str = "Oops, something went wrong. 😅";

pub async fn chat_reply(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> (StatusCode, Json<ChatReply>) {
    let personality = payload.personality;
    match state.model.reply(personality, &payload.message).await {
        Ok(text) => (StatusCode::OK, Json(ChatReply { text })),
        Err(e) => {
            tracing::error!("Failed to generate {} reply: {:?}", personality, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatReply {
                    text: FAILURE_TEXT.to_string(),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModelError, ModelResult, ReplyModel};
    use async_trait::async_trait;
    use shared::models::Personality;
    use std::sync::Arc;

    struct EchoModel;

    #[async_trait]
    impl ReplyModel for EchoModel {
        async fn reply(&self, personality: Personality, message: &str) -> ModelResult<String> {
            Ok(format!("{}: {}", personality, message))
        }
    }

    struct BrokenModel;

    #[async_trait]
    impl ReplyModel for BrokenModel {
        async fn reply(&self, _: Personality, _: &str) -> ModelResult<String> {
            Err(ModelError::EmptyReply)
        }
    }

    #[tokio::test]
    async fn test_chat_reply_success() {
        let state = AppState::new(Arc::new(EchoModel));
        let request = ChatRequest::new(Personality::Formal, "good morning");
        let (status, Json(reply)) = chat_reply(State(state), Json(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply.text, "formal: good morning");
    }

    #[tokio::test]
    async fn test_chat_reply_failure_is_500() {
        let state = AppState::new(Arc::new(BrokenModel));
        let request = ChatRequest::new(Personality::Random, "anything");
        let (status, Json(reply)) = chat_reply(State(state), Json(request)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply.text, FAILURE_TEXT);
    }
}
