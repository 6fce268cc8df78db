mod config;
mod logging;

pub use config::{AppConfig, ConfigError, Provider};
pub use logging::init_tracing;
