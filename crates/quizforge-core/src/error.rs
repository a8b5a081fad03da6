//! Quiz error types.
//!
//! Authoring problems are rejected when a [`crate::model::Question`] is
//! constructed, never deferred to scoring. Lookup errors cover the accessors
//! that take a question index.

use thiserror::Error;

/// Errors produced by quiz construction and index lookups.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question was authored in a shape that can never be scored.
    #[error("invalid question: {0}")]
    InvalidQuestion(#[from] InvalidQuestion),

    /// An accessor asked for a question the bank does not have.
    #[error("question index {index} out of range (quiz has {len} questions)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// The specific authoring defect behind [`QuizError::InvalidQuestion`].
#[derive(Debug, Error)]
pub enum InvalidQuestion {
    /// The choice list is empty.
    #[error("question has no choices")]
    NoChoices,

    /// No choice is marked correct.
    #[error("no choice is marked correct")]
    NoCorrectChoice,

    /// A correct-answer index points past the end of the choice list.
    #[error("correct choice index {index} out of range ({choices} choices)")]
    CorrectOutOfRange { index: usize, choices: usize },
}

impl QuizError {
    /// Returns `true` for defects that must be fixed in the quiz source.
    pub fn is_authoring(&self) -> bool {
        matches!(self, QuizError::InvalidQuestion(_))
    }
}
