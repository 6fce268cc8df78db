//! Router for the topics API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, routing::get};

use super::public;
use crate::ai::topics::TOPICS;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// List the topics offered by the topic picker
async fn list_topics() -> Json<public::TopicsResponse> {
    Json(public::TopicsResponse {
        topics: TOPICS.iter().map(|t| t.to_string()).collect(),
    })
}

/// Create the topics router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(list_topics))
}
