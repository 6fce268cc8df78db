use async_trait::async_trait;

use crate::ai::chat::{ChatService, Role, ServiceError, Turn};
use crate::gemini::{Content, GenerateContentRequest, GenerationConfig, generate_content};

/// Gemini conversations have to open with a user turn. When the
/// transcript starts with the tutor greeting this line is sent ahead
/// of it.
pub const OPENING_LINE: &str = "Good Afternoon!";

/// Chat service backed by the Gemini `generateContent` API.
pub struct GeminiChat {
    api_hostname: String,
    api_key: String,
    model: String,
    system_prompt: String,
    generation_config: GenerationConfig,
}

impl GeminiChat {
    pub fn new(api_hostname: &str, api_key: &str, model: &str, system_prompt: &str) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            system_prompt: system_prompt.to_string(),
            generation_config: GenerationConfig::default(),
        }
    }

    fn request(&self, history: &[Turn], new_text: &str) -> GenerateContentRequest {
        let mut contents = Vec::with_capacity(history.len() + 2);
        if history.first().is_some_and(|t| t.role() != Role::User) {
            contents.push(Content::new("user", OPENING_LINE));
        }
        for content in history.iter().map(Content::from) {
            push_content(&mut contents, content);
        }
        push_content(&mut contents, Content::new("user", new_text));

        GenerateContentRequest {
            system_instruction: Content::instruction(&self.system_prompt),
            contents,
            generation_config: self.generation_config.clone(),
        }
    }
}

/// Appends `content`, folding it into the previous entry when both have
/// the same role. A user turn whose reply failed stays in the transcript,
/// and Gemini expects user and model turns to alternate.
fn push_content(contents: &mut Vec<Content>, content: Content) {
    match contents.last_mut() {
        Some(last) if last.role == content.role => last.parts.extend(content.parts),
        _ => contents.push(content),
    }
}

#[async_trait]
impl ChatService for GeminiChat {
    async fn send(&self, history: &[Turn], new_text: &str) -> Result<String, ServiceError> {
        let request = self.request(history, new_text);
        let resp =
            generate_content(&request, &self.api_hostname, &self.api_key, &self.model).await?;

        resp.text().ok_or_else(|| {
            let reason = resp
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "no candidates".to_string());
            ServiceError::EmptyReply(reason)
        })
    }
}
