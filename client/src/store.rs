use shared::models::{ChatMessage, ChatSettings, Personality, Theme};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// A reply is being acquired; input should stay disabled
    pub is_typing: bool,
    pub settings: ChatSettings,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    AppendMessage(ChatMessage),
    SetTyping(bool),
    SetPersonality(Personality),
    SetMemoryEnabled(bool),
    ToggleTheme,
    ClearMessages,
}

impl ChatState {
    pub fn with_settings(settings: ChatSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn personality(&self) -> Personality {
        self.settings.current_personality
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::AppendMessage(msg) => {
                self.messages.push(msg);
            }
            Action::SetTyping(is_typing) => {
                self.is_typing = is_typing;
            }
            Action::SetPersonality(personality) => {
                self.settings.current_personality = personality;
            }
            Action::SetMemoryEnabled(enabled) => {
                // Persisted history is the caller's to drop; the visible
                // conversation stays.
                self.settings.memory_enabled = enabled;
            }
            Action::ToggleTheme => {
                self.settings.theme = self.settings.theme.toggle();
            }
            Action::ClearMessages => {
                self.messages.clear();
            }
        }
    }
}
