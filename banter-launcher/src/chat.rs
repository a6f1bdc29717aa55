use crate::cli::ChatArgs;
use client::{
    AcquirerConfig, Action, ChannelNotifier, ChatState, ResponseAcquirer, SessionError,
    SessionStore, export_txt,
};
use shared::models::{ChatMessage, ChatSettings, Personality};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "Commands:
  /personality <friendly|sarcastic|formal|random>
  /theme            toggle light/dark
  /memory <on|off>  keep history between sessions
  /export [dir]     write a .txt transcript
  /clear            forget this conversation
  /help
  /quit";

#[derive(Debug, PartialEq)]
enum Input {
    Message(String),
    Personality(String),
    Theme,
    Memory(Option<bool>),
    Export(Option<PathBuf>),
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl Input {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let Some(command) = line.strip_prefix('/') else {
            return Some(Input::Message(line.to_string()));
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        let input = match name {
            "personality" | "p" => Input::Personality(arg.to_string()),
            "theme" => Input::Theme,
            "memory" => Input::Memory(match arg {
                "on" => Some(true),
                "off" => Some(false),
                _ => None,
            }),
            "export" => Input::Export((!arg.is_empty()).then(|| PathBuf::from(arg))),
            "clear" => Input::Clear,
            "help" | "?" => Input::Help,
            "quit" | "exit" | "q" => Input::Quit,
            other => Input::Unknown(other.to_string()),
        };
        Some(input)
    }
}

struct Session {
    state: ChatState,
    acquirer: ResponseAcquirer,
    store: SessionStore,
}

impl Session {
    async fn send(&mut self, text: String) {
        let personality = self.state.personality();
        self.state.reduce(Action::AppendMessage(ChatMessage::user(text.clone())));
        self.state.reduce(Action::SetTyping(true));
        println!("{} ...", personality.emoji());

        let reply = self.acquirer.acquire_response(personality, &text).await;

        self.state.reduce(Action::SetTyping(false));
        println!("{} {}", personality.emoji(), reply);
        let msg = ChatMessage::assistant(reply, personality);
        self.state.reduce(Action::AppendMessage(msg));
        self.persist();
    }

    fn persist(&self) {
        if !self.state.settings.memory_enabled {
            return;
        }
        if let Err(e) = self.store.save_messages(&self.state.messages) {
            tracing::error!("Failed to save messages: {}", e);
        }
    }

    fn set_personality(&mut self, tag: &str) {
        match tag.parse::<Personality>() {
            Ok(personality) => {
                self.state.reduce(Action::SetPersonality(personality));
                println!(
                    "{} Personality: {}",
                    personality.emoji(),
                    personality.label()
                );
            }
            Err(e) => println!("{}", e),
        }
    }

    fn toggle_theme(&mut self) {
        self.state.reduce(Action::ToggleTheme);
        let theme = self.state.theme();
        if let Err(e) = self.store.save_theme(theme) {
            tracing::error!("Failed to save theme: {}", e);
        }
        println!("Theme: {}", theme.as_str());
    }

    fn set_memory(&mut self, enabled: bool) {
        self.state.reduce(Action::SetMemoryEnabled(enabled));
        if enabled {
            self.persist();
        } else if let Err(e) = self.store.clear_messages() {
            tracing::error!("Failed to clear saved messages: {}", e);
        }
        println!("Memory {}", if enabled { "on" } else { "off" });
    }

    fn export(&self, dir: Option<PathBuf>) {
        let dir = dir.unwrap_or_else(|| PathBuf::from("."));
        match export_txt(&self.state.messages, self.state.personality(), &dir) {
            Ok(path) => println!("Saved {}", path.display()),
            Err(e) => println!("{}", e),
        }
    }

    fn clear(&mut self) {
        self.state.reduce(Action::ClearMessages);
        if let Err(e) = self.store.clear_messages() {
            tracing::error!("Failed to clear saved messages: {}", e);
        }
        println!("Conversation cleared");
    }
}

/// Settings for a new run, plus the saved history when memory is on. With
/// memory off the saved history is deleted instead.
fn restore_state(
    store: &SessionStore,
    personality: Option<Personality>,
    memory_enabled: bool,
) -> Result<ChatState, SessionError> {
    let settings = ChatSettings {
        memory_enabled,
        current_personality: personality.unwrap_or_default(),
        theme: store.load_theme(),
    };
    let mut state = ChatState::with_settings(settings);
    if memory_enabled {
        for msg in store.load_messages() {
            state.reduce(Action::AppendMessage(msg));
        }
    } else {
        store.clear_messages()?;
    }
    Ok(state)
}

pub async fn run(args: ChatArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = match args.data_dir {
        Some(dir) => SessionStore::new(dir),
        None => SessionStore::open_default()?,
    };

    tracing::info!("Keeping chat data in {}", store.dir().display());
    let state = restore_state(&store, args.personality, !args.no_memory)?;

    let (notifier, mut notices) = ChannelNotifier::channel();
    tokio::spawn(async move {
        while let Some(notice) = notices.recv().await {
            eprintln!("⚠️  {}", notice);
        }
    });

    let config = AcquirerConfig {
        endpoint: args.endpoint,
        timeout: Duration::from_millis(args.timeout_ms),
    };
    let acquirer = ResponseAcquirer::from_config(&config).with_notifier(Arc::new(notifier));
    tracing::info!("Sending chat requests to {}", config.endpoint);

    let mut session = Session {
        state,
        acquirer,
        store,
    };

    let personality = session.state.personality();
    println!(
        "{} {} mode, {} earlier messages. Type /help for commands.",
        personality.emoji(),
        personality.label(),
        session.state.messages.len()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let Some(input) = Input::parse(&line) else {
            continue;
        };

        match input {
            Input::Message(text) => session.send(text).await,
            Input::Personality(tag) => session.set_personality(&tag),
            Input::Theme => session.toggle_theme(),
            Input::Memory(Some(enabled)) => session.set_memory(enabled),
            Input::Memory(None) => println!("Usage: /memory <on|off>"),
            Input::Export(dir) => session.export(dir),
            Input::Clear => session.clear(),
            Input::Help => println!("{}", HELP),
            Input::Quit => break,
            Input::Unknown(name) => println!("Unknown command /{}, try /help", name),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use client::{AcquireError, ChatTransport, LocalBanterGenerator};
    use shared::models::{ChatRequest, Theme};
    use std::path::Path;
    use tempfile::TempDir;

    struct Offline;

    #[async_trait]
    impl ChatTransport for Offline {
        async fn send(&self, _request: &ChatRequest) -> Result<String, AcquireError> {
            Err(AcquireError::RemoteUnavailable("offline".to_string()))
        }
    }

    fn offline_session(dir: &Path, memory_enabled: bool) -> Session {
        let settings = ChatSettings {
            memory_enabled,
            ..ChatSettings::default()
        };
        Session {
            state: ChatState::with_settings(settings),
            acquirer: ResponseAcquirer::new(Arc::new(Offline)),
            store: SessionStore::new(dir),
        }
    }

    fn history_file(session: &Session) -> PathBuf {
        session.store.dir().join("ai-chat-messages.json")
    }

    #[test]
    fn test_parse_messages() {
        assert_eq!(Input::parse("   "), None);
        assert_eq!(
            Input::parse("  hello there "),
            Some(Input::Message("hello there".to_string()))
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Input::parse("/personality sarcastic"),
            Some(Input::Personality("sarcastic".to_string()))
        );
        assert_eq!(Input::parse("/p"), Some(Input::Personality(String::new())));
        assert_eq!(
            Input::parse("/memory off"),
            Some(Input::Memory(Some(false)))
        );
        assert_eq!(Input::parse("/memory maybe"), Some(Input::Memory(None)));
        assert_eq!(Input::parse("/export"), Some(Input::Export(None)));
        assert_eq!(
            Input::parse("/export /tmp/chats"),
            Some(Input::Export(Some(PathBuf::from("/tmp/chats"))))
        );
        assert_eq!(Input::parse("/quit"), Some(Input::Quit));
        assert_eq!(
            Input::parse("/dance"),
            Some(Input::Unknown("dance".to_string()))
        );
    }

    #[tokio::test]
    async fn test_send_appends_turn_and_saves_it() {
        let dir = TempDir::new().unwrap();
        let mut session = offline_session(dir.path(), true);
        session.set_personality("formal");
        session.send("hello".to_string()).await;

        let messages = &session.state.messages;
        assert_eq!(messages.len(), 2);
        assert!(messages[0].is_user);
        assert_eq!(messages[0].text, "hello");
        assert!(!messages[1].is_user);
        assert_eq!(messages[1].personality, Some(Personality::Formal));
        assert_eq!(
            messages[1].text,
            LocalBanterGenerator::greeting(Personality::Formal)
        );
        assert!(!session.state.is_typing);
        assert!(history_file(&session).exists());
        assert_eq!(session.store.load_messages(), session.state.messages);
    }

    #[tokio::test]
    async fn test_memory_off_drops_saved_history() {
        let dir = TempDir::new().unwrap();
        let mut session = offline_session(dir.path(), true);
        session.send("hello".to_string()).await;
        assert!(history_file(&session).exists());

        session.set_memory(false);
        assert!(!history_file(&session).exists());
        assert_eq!(session.state.messages.len(), 2);

        session.send("how are you".to_string()).await;
        assert_eq!(session.state.messages.len(), 4);
        assert!(!history_file(&session).exists());

        session.set_memory(true);
        assert_eq!(session.store.load_messages().len(), 4);
    }

    #[tokio::test]
    async fn test_clear_forgets_conversation() {
        let dir = TempDir::new().unwrap();
        let mut session = offline_session(dir.path(), true);
        session.send("hello".to_string()).await;

        session.clear();
        assert!(session.state.messages.is_empty());
        assert!(!history_file(&session).exists());
    }

    #[test]
    fn test_unknown_personality_keeps_current() {
        let dir = TempDir::new().unwrap();
        let mut session = offline_session(dir.path(), true);
        session.set_personality("grumpy");
        assert_eq!(session.state.personality(), Personality::Friendly);
    }

    #[test]
    fn test_restore_loads_history_with_memory_on() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        let history = vec![ChatMessage::user("hello")];
        store.save_messages(&history).unwrap();
        store.save_theme(Theme::Light).unwrap();

        let personality = Some(Personality::Random);
        let state = restore_state(&store, personality, true).unwrap();
        assert_eq!(state.messages, history);
        assert_eq!(state.personality(), Personality::Random);
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_restore_with_memory_off_deletes_history() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        let history = vec![ChatMessage::user("hello")];
        store.save_messages(&history).unwrap();

        let state = restore_state(&store, None, false).unwrap();
        assert!(state.messages.is_empty());
        assert!(!state.settings.memory_enabled);
        assert_eq!(state.personality(), Personality::Friendly);
        assert!(!store.dir().join("ai-chat-messages.json").exists());
    }
}
