//! Client for the Google Gemini `generateContent` API.
mod chat;
mod core;

pub use self::core::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    generate_content,
};
pub use chat::{GeminiChat, OPENING_LINE};
