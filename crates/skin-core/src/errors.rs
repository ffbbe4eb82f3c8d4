//! Cross-cutting error types for SkinSense.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `ConfigError`) are defined in
//! their respective crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors raised by quiz scoring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The user has no recorded answers; the quiz has to be taken first.
    #[error("No answers recorded. Start the quiz first.")]
    NoAnswers,

    /// The chosen option does not belong to the question being answered.
    #[error("Option {option_id} does not belong to question {question_id}")]
    OptionMismatch { question_id: i64, option_id: i64 },
}

/// Errors that can be raised by any SkinSense crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (range, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
