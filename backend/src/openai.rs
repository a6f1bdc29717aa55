use crate::model::{ModelConfig, ModelError, ModelResult, ReplyModel};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;
use shared::models::Personality;

pub fn personality_instruction(personality: Personality) -> &'static str {
    match personality {
        Personality::Friendly => "Respond warmly, positively, and kindly, with emojis.",
        Personality::Sarcastic => "Respond with dry, witty sarcasm and humor.",
        Personality::Formal => "Respond professionally, polite, and structured.",
        Personality::Random => "Respond unpredictably, playful, and with quirky randomness.",
    }
}

const REPLY_SHAPE: &str = "Reply in a single conversational response.";

/// Build the user prompt sent alongside the personality instruction
pub fn build_prompt(personality: Personality, message: &str) -> String {
    format!(
        "Personality: {}\nInstruction: {}\nUser message: {}\n{}",
        personality,
        personality_instruction(personality),
        message,
        REPLY_SHAPE
    )
}

/// Reply model backed by any OpenAI-compatible chat completion API
pub struct OpenAiModel {
    config: ModelConfig,
    client: Client<OpenAIConfig>,
}

impl OpenAiModel {
    pub fn new(config: ModelConfig) -> Self {
        let client = Client::with_config(
            OpenAIConfig::new()
                .with_api_key(config.api_key.clone())
                .with_api_base(config.api_base.clone()),
        );
        Self { config, client }
    }
}

#[async_trait]
impl ReplyModel for OpenAiModel {
    async fn reply(&self, personality: Personality, message: &str) -> ModelResult<String> {
        if self.config.api_key.is_empty() {
            return Err(ModelError::MissingApiKey);
        }

        let system = ChatCompletionRequestSystemMessageArgs::default()
            .content(personality_instruction(personality))
            .build()?;
        let user = ChatCompletionRequestUserMessageArgs::default()
            .content(build_prompt(personality, message))
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.config.model.clone())
            .messages(vec![
                ChatCompletionRequestMessage::System(system),
                ChatCompletionRequestMessage::User(user),
            ])
            .temperature(self.config.temperature)
            .build()?;

        tracing::debug!(
            "Requesting {} reply from {}",
            personality,
            self.config.model
        );
        let response = self.client.chat().create(request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(ModelError::EmptyReply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_personality_and_message() {
        let prompt = build_prompt(Personality::Sarcastic, "is it raining?");
        assert!(prompt.starts_with("Personality: sarcastic\n"));
        assert!(prompt.contains("Instruction: Respond with dry, witty"));
        assert!(prompt.contains("User message: is it raining?"));
        assert!(prompt.ends_with(REPLY_SHAPE));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let model = OpenAiModel::new(ModelConfig::default());
        let err = model.reply(Personality::Formal, "hello").await.unwrap_err();
        assert!(matches!(err, ModelError::MissingApiKey));
    }
}
