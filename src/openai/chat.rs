use async_trait::async_trait;

use crate::ai::chat::{ChatService, ServiceError, Turn};
use crate::openai::{Message, Role, completion};

/// Chat service backed by an OpenAI compatible chat completions API.
/// Works with local models too by pointing `api_hostname` at them.
pub struct OpenAiChat {
    api_hostname: String,
    api_key: String,
    model: String,
    system_prompt: String,
}

impl OpenAiChat {
    pub fn new(api_hostname: &str, api_key: &str, model: &str, system_prompt: &str) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            system_prompt: system_prompt.to_string(),
        }
    }

    /// System prompt first, then the transcript, then the new message.
    fn messages(&self, history: &[Turn], new_text: &str) -> Vec<Message> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message::new(Role::System, &self.system_prompt));
        messages.extend(history.iter().map(Message::from));
        messages.push(Message::new(Role::User, new_text));
        messages
    }
}

#[async_trait]
impl ChatService for OpenAiChat {
    async fn send(&self, history: &[Turn], new_text: &str) -> Result<String, ServiceError> {
        let messages = self.messages(history, new_text);
        let resp = completion(&messages, &self.api_hostname, &self.api_key, &self.model).await?;

        if let Some(msg) = resp["choices"][0]["message"]["content"].as_str() {
            Ok(msg.to_string())
        } else {
            Err(ServiceError::EmptyReply(resp.to_string()))
        }
    }
}
