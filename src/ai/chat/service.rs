use std::sync::Arc;

use async_trait::async_trait;

use super::error::ServiceError;
use super::models::Turn;
use crate::core::{AppConfig, Provider};
use crate::gemini::GeminiChat;
use crate::openai::OpenAiChat;

/// A hosted model that produces the tutor's next reply. Implementations
/// hold the system prompt and credentials; callers only pass the
/// conversation so far and the new user text.
#[async_trait]
pub trait ChatService {
    async fn send(&self, history: &[Turn], new_text: &str) -> Result<String, ServiceError>;
}

/// One service is shared by every session in the process.
pub type SharedChatService = Arc<dyn ChatService + Send + Sync + 'static>;

/// Builds the remote chat service selected in the config.
pub fn from_config(config: &AppConfig) -> SharedChatService {
    match config.provider {
        Provider::OpenAi => Arc::new(OpenAiChat::new(
            &config.api_hostname,
            &config.api_key,
            &config.model,
            &config.system_prompt,
        )),
        Provider::Gemini => Arc::new(GeminiChat::new(
            &config.api_hostname,
            &config.api_key,
            &config.model,
            &config.system_prompt,
        )),
    }
}
