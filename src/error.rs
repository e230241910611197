use thiserror::Error;

/// Errors the default execution engine reports for a whole run.
///
/// Failures inside examples are never errors, they end up as failed
/// outcomes in the [`RunReport`](crate::report::RunReport).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("unknown formatter `{0}`")]
    UnknownFormatter(String),
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid run configuration: {0}")]
    Json(#[from] serde_json::Error),
}
