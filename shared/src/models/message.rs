use super::personality::Personality;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    /// Personality that produced the reply; `None` for user messages
    pub personality: Option<Personality>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            is_user: true,
            timestamp: Utc::now(),
            personality: None,
        }
    }

    pub fn assistant(text: impl Into<String>, personality: Personality) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            is_user: false,
            timestamp: Utc::now(),
            personality: Some(personality),
        }
    }

    /// Display name of the sender, e.g. "User" or "AI (formal)".
    /// Replies saved without a personality are attributed to `current`.
    pub fn sender(&self, current: Personality) -> String {
        if self.is_user {
            "User".to_string()
        } else {
            format!("AI ({})", self.personality.unwrap_or(current))
        }
    }
}
