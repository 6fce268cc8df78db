use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ai::chat::{Role, ServiceError, Turn};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Part {
    pub text: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn new(role: &str, text: &str) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }

    /// System instructions don't carry a role.
    pub fn instruction(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

impl From<&Turn> for Content {
    fn from(turn: &Turn) -> Self {
        let role = match turn.role() {
            Role::User => "user",
            Role::Tutor => "model",
        };
        Content::new(role, turn.text())
    }
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 8192,
            response_mime_type: "text/plain".to_string(),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate with all of its parts joined.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

pub async fn generate_content(
    request: &GenerateContentRequest,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<GenerateContentResponse, ServiceError> {
    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        api_hostname.trim_end_matches("/"),
        model
    );
    let response = reqwest::Client::new()
        .post(url)
        .header("x-goog-api-key", api_key)
        .timeout(Duration::from_secs(120))
        .json(request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ServiceError::from_status(status.as_u16(), body));
    }

    Ok(response.json().await?)
}
