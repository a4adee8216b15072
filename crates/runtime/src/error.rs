use thiserror::Error;

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The snapshot source could not produce a snapshot.
    #[error("snapshot source failed: {0}")]
    SourceFailed(String),
    /// The source produced a snapshot that violates domain invariants.
    #[error(transparent)]
    InvalidSnapshot(#[from] game_core::GameError),
    /// The worker is gone; the runtime was shut down or panicked.
    #[error("runtime channel closed")]
    ChannelClosed,
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
