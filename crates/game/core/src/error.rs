//! Domain error types.
use thiserror::Error;

/// Errors raised by domain-level validation.
#[derive(Debug, Clone, Error)]
pub enum GameError {
    /// A snapshot violates a domain invariant and must not be published.
    #[error("invalid game snapshot: {0}")]
    InvalidSnapshot(String),
}
