//! Application Error Types
//!
//! Centralized error handling for the entity store.
//!
//! Absence is never an error here: lookups return `Option` and toggles
//! return `bool`. Errors are reserved for violated preconditions.

/// Application error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// A required argument was missing or empty
    #[error("Validation error: {0}")]
    Validation(String),

    /// The entity is not in a state that allows the operation
    #[error("State error: {0}")]
    State(String),

    /// A collection was requested with an unusable name or type
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Error raised when an operation needs a persisted entity.
    pub fn unsaved(action: &str) -> Self {
        AppError::State(format!("Cannot {} an unsaved object", action))
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    /// Check if this is a state error.
    pub fn is_state(&self) -> bool {
        matches!(self, AppError::State(_))
    }
}
