use std::sync::{Arc, RwLock};

use anyhow::Result;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::api::state::AppState;
use crate::core::AppConfig;

pub fn app(shared_state: Arc<RwLock<AppState>>) -> Router {
    // The chat widget is served from elsewhere
    let cors = CorsLayer::permissive();

    Router::new()
        .nest("/api", routes::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::clone(&shared_state))
}

// Run the server
pub async fn serve(host: String, port: String, config: AppConfig) -> Result<()> {
    tracing::info!(provider = %config.provider, model = %config.model, "Starting tutor");

    let app_state = AppState::new(&config);
    let shared_state = Arc::new(RwLock::new(app_state));
    let app = app(Arc::clone(&shared_state));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;

    tracing::debug!("Server started. Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
