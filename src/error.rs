use thiserror::Error;

use crate::ParticipantIndex;

/// Result type specialized for secret sharing operations.
pub type Result<T> = std::result::Result<T, VssError>;

#[derive(Debug, Error)]
pub enum VssError {
    #[error("secure random source failed: {0}")]
    RandomSource(#[from] rand::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("degenerate participant set: index {0} collides with another index")]
    DegenerateSet(ParticipantIndex),
    #[error("invalid parameters: threshold {threshold}, share count {share_count}")]
    InvalidParameters { threshold: usize, share_count: usize },
    #[error("insufficient shares: need {required}, got {provided}")]
    InsufficientShares { required: usize, provided: usize },
    #[error("malformed parameters: {0}")]
    Config(#[from] serde_json::Error),
}
