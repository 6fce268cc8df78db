//! Router for the sessions API. Each control of the chat widget maps
//! to one handler: creating a session, picking a topic, sending a
//! message and closing the session.

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use super::public;
use crate::ai::chat::{Session, SessionError};
use crate::api::public::ApiError;
use crate::api::state::{AppState, SessionHandle};

type SharedState = Arc<RwLock<AppState>>;

const TUTOR_UNAVAILABLE: &str = "Tutor unavailable, try again.";

fn find_session(state: &SharedState, id: &str) -> Option<SessionHandle> {
    state.read().expect("Unable to read shared state").session(id)
}

fn not_found(id: &str) -> Response {
    (StatusCode::NOT_FOUND, format!("Session {} not found", id)).into_response()
}

/// Turns the outcome of a submission into a response. The current
/// transcript is always returned, including when the tutor failed to
/// answer, so the student's own turn stays visible.
fn submission_response(
    session: &Session,
    result: Result<(), SessionError>,
) -> Result<Response, ApiError> {
    let view = public::SessionResponse::new(session);
    match result {
        Ok(()) => Ok(Json(view).into_response()),
        Err(SessionError::Service { .. }) => {
            Ok((StatusCode::BAD_GATEWAY, Json(view.with_error(TUTOR_UNAVAILABLE))).into_response())
        }
        Err(e @ SessionError::UnknownTopic(_)) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(view.with_error(&e.to_string())),
        )
            .into_response()),
        Err(e @ SessionError::InvalidState) => Err(e.into()),
    }
}

/// Create and initialize a new session
async fn create_session(State(state): State<SharedState>) -> Response {
    let handle = state
        .write()
        .expect("Unable to write shared state")
        .open_session();
    let session = handle.lock().await;
    tracing::info!(session_id = %session.id, "Session created");

    (
        StatusCode::CREATED,
        Json(public::SessionResponse::new(&session)),
    )
        .into_response()
}

/// Get the transcript of a session
async fn get_session(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let Some(handle) = find_session(&state, &id) else {
        return not_found(&id);
    };
    let session = handle.lock().await;
    Json(public::SessionResponse::new(&session)).into_response()
}

/// Submit a topic picked from the topic list
async fn submit_topic(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<public::TopicRequest>,
) -> Result<Response, ApiError> {
    let Some(handle) = find_session(&state, &id) else {
        return Ok(not_found(&id));
    };
    let mut session = handle.lock().await;
    let result = session.submit_topic(&payload.label).await.map(|_| ());
    submission_response(&session, result)
}

/// Submit a message typed by the student
async fn submit_message(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<public::MessageRequest>,
) -> Result<Response, ApiError> {
    let Some(handle) = find_session(&state, &id) else {
        return Ok(not_found(&id));
    };
    let mut session = handle.lock().await;

    // The field this text came from has already been read
    if let Some(key) = &payload.input_key {
        if *key != session.input_key() {
            tracing::debug!(session_id = %id, input_key = %key, "Ignoring stale input");
            return Ok(Json(public::SessionResponse::new(&session)).into_response());
        }
    }

    let result = session.submit_message(&payload.text).await.map(|_| ());
    submission_response(&session, result)
}

/// Dispose of a session
async fn delete_session(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let removed = state
        .write()
        .expect("Unable to write shared state")
        .dispose_session(&id);
    if removed {
        tracing::info!(session_id = %id, "Session disposed");
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found(&id)
    }
}

/// Create the sessions router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(create_session))
        .route("/{id}", get(get_session).delete(delete_session))
        .route("/{id}/topic", post(submit_topic))
        .route("/{id}/message", post(submit_message))
}
