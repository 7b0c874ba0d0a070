//! Facade error types.

use thiserror::Error;

/// A request the facade could not decode, or a response it could not encode.
#[derive(Debug, Error)]
pub enum FacadeError {
    #[error("invalid level: {0}")]
    Level(#[source] serde_json::Error),

    #[error("invalid program: {0}")]
    Program(#[source] serde_json::Error),

    #[error("invalid options: {0}")]
    Options(#[source] serde_json::Error),

    #[error("invalid hint request: {0}")]
    HintRequest(#[source] serde_json::Error),

    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Facade result type alias.
pub type FacadeResult<T> = Result<T, FacadeError>;
