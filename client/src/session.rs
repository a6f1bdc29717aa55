//! Conversation history and theme, persisted between runs.

use directories::ProjectDirs;
use shared::models::{ChatMessage, Theme};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

const MESSAGES_FILE: &str = "ai-chat-messages.json";
const THEME_FILE: &str = "chat-theme";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not determine a data directory")]
    NoDataDir,
}

pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform data directory, e.g. `~/.local/share/banter` on Linux
    pub fn default_dir() -> Result<PathBuf, SessionError> {
        ProjectDirs::from("", "", "banter")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(SessionError::NoDataDir)
    }

    pub fn open_default() -> Result<Self, SessionError> {
        Ok(Self::new(Self::default_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Saved messages, or none if nothing was saved or the file is unreadable
    pub fn load_messages(&self) -> Vec<ChatMessage> {
        match self.load_messages_internal() {
            Ok(messages) => messages,
            Err(e) => {
                tracing::error!("Failed to load messages, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    fn load_messages_internal(&self) -> Result<Vec<ChatMessage>, SessionError> {
        let path = self.dir.join(MESSAGES_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&path)?;
        let messages: Vec<ChatMessage> = serde_json::from_str(&json)?;
        tracing::debug!("Loaded {} messages from {}", messages.len(), path.display());
        Ok(messages)
    }

    /// Write the conversation; an empty one leaves the saved history alone.
    pub fn save_messages(&self, messages: &[ChatMessage]) -> Result<(), SessionError> {
        if messages.is_empty() {
            return Ok(());
        }
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string(messages)?;
        fs::write(self.dir.join(MESSAGES_FILE), json)?;
        Ok(())
    }

    pub fn clear_messages(&self) -> Result<(), SessionError> {
        match fs::remove_file(self.dir.join(MESSAGES_FILE)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn load_theme(&self) -> Theme {
        match fs::read_to_string(self.dir.join(THEME_FILE)) {
            Ok(saved) if saved.trim() == Theme::Light.as_str() => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), SessionError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(THEME_FILE), theme.as_str())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Personality;
    use tempfile::TempDir;

    #[test]
    fn test_messages_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        assert!(store.load_messages().is_empty());

        let messages = vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant("Good day to you.", Personality::Formal),
        ];
        store.save_messages(&messages).unwrap();
        assert_eq!(store.load_messages(), messages);

        store.clear_messages().unwrap();
        assert!(store.load_messages().is_empty());
        store.clear_messages().unwrap();
    }

    #[test]
    fn test_empty_save_keeps_history() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        let messages = vec![ChatMessage::user("hello")];
        store.save_messages(&messages).unwrap();
        store.save_messages(&[]).unwrap();
        assert_eq!(store.load_messages(), messages);
    }

    #[test]
    fn test_corrupt_history_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MESSAGES_FILE), "{not json").unwrap();
        let store = SessionStore::new(dir.path());
        assert!(store.load_messages().is_empty());
    }

    #[test]
    fn test_theme_defaults_to_dark() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("nested"));
        assert_eq!(store.load_theme(), Theme::Dark);

        store.save_theme(Theme::Light).unwrap();
        assert_eq!(store.load_theme(), Theme::Light);
        store.save_theme(Theme::Dark).unwrap();
        assert_eq!(store.load_theme(), Theme::Dark);
    }
}
