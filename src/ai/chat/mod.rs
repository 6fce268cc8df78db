//! Conversation sessions between a student and the tutor.
mod core;
mod error;
mod models;
mod service;

pub use self::core::Session;
pub use error::{ServiceError, SessionError};
pub use models::{Role, Transcript, Turn, View};
pub use service::{ChatService, SharedChatService, from_config};
