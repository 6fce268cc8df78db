use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::ai::chat::{self, ServiceError, Turn};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

impl From<chat::Role> for Role {
    fn from(role: chat::Role) -> Self {
        match role {
            chat::Role::User => Role::User,
            chat::Role::Tutor => Role::Assistant,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Message {
    role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

impl From<&Turn> for Message {
    fn from(turn: &Turn) -> Self {
        Message::new(turn.role().into(), turn.text())
    }
}

pub async fn completion(
    messages: &[Message],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Value, ServiceError> {
    let payload = json!({
        "model": model,
        "messages": messages,
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 10))
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ServiceError::from_status(status.as_u16(), body));
    }

    Ok(response.json().await?)
}
