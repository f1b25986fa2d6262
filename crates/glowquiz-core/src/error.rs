//! Quiz error types.
//!
//! Navigation and capture never fail; these errors only describe misuse of
//! the selection API by the code driving a session.

use thiserror::Error;

use crate::model::QuestionId;

/// Errors returned when toggling option widgets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// No question is on screen (the quiz has not started or is completed).
    #[error("no question is currently displayed")]
    NotInProgress,

    /// The value token is not one of the displayed question's options.
    #[error("question {question} has no option '{value}'")]
    UnknownOption { question: QuestionId, value: String },
}
