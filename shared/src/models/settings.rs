use super::personality::Personality;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatSettings {
    /// Keep conversation history across sessions
    pub memory_enabled: bool,
    pub current_personality: Personality,
    pub theme: Theme,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            memory_enabled: true,
            current_personality: Personality::Friendly,
            theme: Theme::Dark,
        }
    }
}
