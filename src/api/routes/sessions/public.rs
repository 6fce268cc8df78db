//! Public types for the sessions API
use serde::{Deserialize, Serialize};

use crate::ai::chat::{Session, Turn};

#[derive(Deserialize)]
pub struct TopicRequest {
    pub label: String,
}

#[derive(Deserialize)]
pub struct MessageRequest {
    pub text: String,
    // Identity of the input field the text was read from. Stale keys
    // are ignored.
    pub input_key: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: String,
    pub turns: Vec<Turn>,
    pub input_key: String,
    pub last_topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SessionResponse {
    pub fn new(session: &Session) -> Self {
        Self {
            id: session.id.clone(),
            turns: session.render_view().turns().to_vec(),
            input_key: session.input_key(),
            last_topic: session.last_topic().map(String::from),
            error: None,
        }
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }
}
