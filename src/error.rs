//! Crate error type

use thiserror::Error;

/// Errors raised while building actors or loading configuration and snapshots.
///
/// Frame advancement itself never fails; only construction and I/O do.
#[derive(Debug, Error)]
pub enum Error {
    /// An actor shape template had no points
    #[error("actor shape template must contain at least one point")]
    EmptyShape,

    /// A position, offset, speed or heading was NaN or infinite
    #[error("non-finite value for {0}")]
    NonFinite(&'static str),

    /// Settings failed validation
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A loaded scene had an unusable arena
    #[error("invalid scene: {0}")]
    InvalidScene(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
