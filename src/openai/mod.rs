//! Client for OpenAI compatible chat completion APIs.
mod chat;
mod core;

pub use self::core::{Message, Role, completion};
pub use chat::OpenAiChat;
