//! Error types for the bot core.

use thiserror::Error;

/// Top-level error for the bot core. Outbound sends are the only fallible core operation.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`RelayError`].
pub type Result<T> = std::result::Result<T, RelayError>;
