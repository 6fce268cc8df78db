use anyhow::Result;

use crate::api;
use crate::core::{AppConfig, init_tracing};

pub async fn run(host: String, port: String) -> Result<()> {
    init_tracing(&format!(
        "{}=debug,tower_http=debug,axum::rejection=trace",
        env!("CARGO_CRATE_NAME")
    ));
    let config = AppConfig::from_env()?;
    api::serve(host, port, config).await
}
