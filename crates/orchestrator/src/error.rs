#![forbid(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] config::Error),

    #[error("telemetry error: {0}")]
    Telemetry(#[from] telemetry::Error),

    #[error("simulator task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
