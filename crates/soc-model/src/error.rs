//! Model parsing errors.

use thiserror::Error;

/// Error raised when raw identifiers or values do not fit the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Step identifier is not part of the sequence.
    #[error("Unknown step: {0}")]
    UnknownStep(String),

    /// Step identifier appears more than once.
    #[error("Step listed more than once: {0}")]
    DuplicateStep(String),

    /// Field key does not name a section.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Value shape does not match the section.
    #[error("Section '{section}' does not hold a {expected} value")]
    WrongKind {
        section: &'static str,
        expected: &'static str,
    },
}
