//! Error types for the gesture coordinator.
//!
//! None of these abort anything: they are negative results the caller checks.

use crate::model::ContactId;

/// Result type for binding and configuration operations
pub type Result<T> = std::result::Result<T, GestureError>;

#[derive(Debug, thiserror::Error)]
pub enum GestureError {
    #[error("'{0}' is not a registered gesture")]
    UnrecognizedGesture(String),

    #[error("a gesture is already registered under '{0}'")]
    AlreadyRegistered(String),

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Why the current contact sequence was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Invalidation {
    #[error("{total} contacts reported but only {targeted} on the interaction target")]
    TargetMismatch { total: usize, targeted: usize },

    #[error("contact {0} started while already tracked")]
    DuplicateStart(ContactId),

    #[error("host cancelled the contact sequence")]
    Cancelled,
}
