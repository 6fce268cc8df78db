use thiserror::Error;

use super::models::Turn;

/// Failures talking to the remote chat service.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limited or out of quota")]
    RateLimited,

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("No reply text in response: {0}")]
    EmptyReply(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Transport(err.to_string())
    }
}

impl ServiceError {
    /// Maps a non-success HTTP status to the matching variant.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => ServiceError::Unauthorized(body),
            429 => ServiceError::RateLimited,
            _ => ServiceError::Api { status, body },
        }
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session has not been initialized")]
    InvalidState,

    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    /// The user's turn is already in the transcript; `pending` is a
    /// copy of it so the caller can offer a retry.
    #[error("Tutor unavailable: {source}")]
    Service {
        #[source]
        source: ServiceError,
        pending: Turn,
    },
}
