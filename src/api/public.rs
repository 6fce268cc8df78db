//! Public API types

use axum::response::{IntoResponse, Response};
use http::StatusCode;

/// Errors that aren't part of the session contract. They indicate a
/// bug rather than something the student did, so they all map to a 500.
#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{:#}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {}", self.0),
        )
            .into_response()
    }
}

/// Lets handlers use `?` on anything that converts to `anyhow::Error`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// Re-export public types from each route

pub mod sessions {
    pub use crate::api::routes::sessions::public::*;
}

pub mod topics {
    pub use crate::api::routes::topics::public::*;
}
