use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Top-level runtime failure for the service binaries. Request-level
/// errors never reach this type; they are translated to status codes
/// inside the router.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
