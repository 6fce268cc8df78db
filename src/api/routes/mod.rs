//! API routes module

pub mod sessions;
pub mod topics;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Session routes
        .nest("/sessions", sessions::router())
        // Topic picker routes
        .nest("/topics", topics::router())
}
