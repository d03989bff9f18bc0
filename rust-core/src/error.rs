//! Error types for the spectrum pipeline

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DspError {
    #[error("Unsupported window kind: {0}")]
    UnsupportedWindowKind(String),

    #[error("Unsupported signal kind: {0}")]
    UnsupportedSignalKind(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid signal parameters: {0}")]
    InvalidSignal(String),

    #[error("Transform failed: {0}")]
    Transform(String),
}

/// Convenience alias so callers can write `Result<T>` instead of `Result<T, DspError>`.
pub type Result<T> = std::result::Result<T, DspError>;
