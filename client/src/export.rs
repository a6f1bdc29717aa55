use chrono::{Local, NaiveDate, Utc};
use shared::models::{ChatMessage, Personality};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No messages to export!")]
    Empty,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Plain-text transcript, one `[timestamp] Sender: text` block per message
pub fn transcript_text(messages: &[ChatMessage], current: Personality) -> String {
    messages
        .iter()
        .map(|msg| {
            let local = msg.timestamp.with_timezone(&Local);
            let timestamp = local.format("%Y-%m-%d %H:%M:%S");
            format!("[{}] {}: {}", timestamp, msg.sender(current), msg.text)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn transcript_file_name(date: NaiveDate) -> String {
    format!("ai-chat-{}.txt", date.format("%Y-%m-%d"))
}

/// Write the transcript into `dir` and return the file's path
pub fn export_txt(
    messages: &[ChatMessage],
    current: Personality,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    if messages.is_empty() {
        return Err(ExportError::Empty);
    }
    fs::create_dir_all(dir)?;
    let path = dir.join(transcript_file_name(Utc::now().date_naive()));
    fs::write(&path, transcript_text(messages, current))?;
    tracing::info!("Wrote {} messages to {}", messages.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_transcript_format() {
        let mut legacy = ChatMessage::assistant("Beep boop!", Personality::Random);
        legacy.personality = None;
        let messages = vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant("Good day to you.", Personality::Formal),
            legacy,
        ];

        let text = transcript_text(&messages, Personality::Sarcastic);
        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].starts_with('['));
        assert!(blocks[0].ends_with("] User: hello"));
        assert!(blocks[1].ends_with("] AI (formal): Good day to you."));
        assert!(blocks[2].ends_with("] AI (sarcastic): Beep boop!"));
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(transcript_file_name(date), "ai-chat-2024-03-09.txt");
    }

    #[test]
    fn test_export_writes_file() {
        let dir = TempDir::new().unwrap();
        let messages = vec![ChatMessage::user("hello")];
        let path = export_txt(&messages, Personality::Friendly, dir.path()).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.ends_with("User: hello"));
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("ai-chat-"));
    }

    #[test]
    fn test_export_empty_conversation() {
        let dir = TempDir::new().unwrap();
        let err = export_txt(&[], Personality::Friendly, dir.path()).unwrap_err();
        assert!(matches!(err, ExportError::Empty));
        assert_eq!(err.to_string(), "No messages to export!");
    }
}
