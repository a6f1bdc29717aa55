use super::personality::Personality;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    pub personality: Personality,
}

impl ChatRequest {
    pub fn new(personality: Personality, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            personality,
        }
    }
}

/// Response body of `POST /api/chat`, for both success and failure statuses
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatReply {
    pub text: String,
}
