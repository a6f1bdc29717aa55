use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    #[default]
    Friendly,
    Sarcastic,
    Formal,
    Random,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersonalityError {
    #[error("Unknown personality: {0}")]
    Unknown(String),
}

impl Personality {
    pub const ALL: [Personality; 4] = [
        Personality::Friendly,
        Personality::Sarcastic,
        Personality::Formal,
        Personality::Random,
    ];

    /// Wire tag, as sent in `ChatRequest::personality`
    pub fn tag(self) -> &'static str {
        match self {
            Personality::Friendly => "friendly",
            Personality::Sarcastic => "sarcastic",
            Personality::Formal => "formal",
            Personality::Random => "random",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Personality::Friendly => "Friendly",
            Personality::Sarcastic => "Sarcastic",
            Personality::Formal => "Formal",
            Personality::Random => "Random",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Personality::Friendly => "😊",
            Personality::Sarcastic => "😏",
            Personality::Formal => "🎩",
            Personality::Random => "🎲",
        }
    }

    /// Map a user-supplied tag onto a personality, coercing unknown tags to
    /// the default one.
    pub fn resolve(tag: &str) -> Self {
        match tag.parse() {
            Ok(personality) => personality,
            Err(e) => {
                let fallback = Self::default();
                tracing::warn!("{}, using {} instead", e, fallback);
                fallback
            }
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Personality {
    type Err = PersonalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "friendly" => Ok(Personality::Friendly),
            "sarcastic" => Ok(Personality::Sarcastic),
            "formal" => Ok(Personality::Formal),
            "random" => Ok(Personality::Random),
            _ => Err(PersonalityError::Unknown(s.to_string())),
        }
    }
}
