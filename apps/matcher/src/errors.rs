use thiserror::Error;

/// Errors that cross the engine's public boundary.
///
/// Everything else (parser failures, remote-service failures, degenerate vocabularies)
/// is logged and degraded to a deterministic fallback inside the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Insufficient input: {0}")]
    InsufficientInput(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl EngineError {
    /// Stable machine-readable code for callers that surface the error to users.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InsufficientInput(_) => "INSUFFICIENT_INPUT",
            EngineError::Catalog(_) => "CATALOG_ERROR",
            EngineError::Io(_) => "IO_ERROR",
            EngineError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
