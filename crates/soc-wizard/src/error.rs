//! Wizard store error types.

use std::path::PathBuf;

use soc_persistence::{CodecError, PersistenceError};
use thiserror::Error;

use crate::submission::SubmissionStatus;

/// Errors reported by store operations that must surface to the user.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Snapshot file could not be read.
    #[error("Failed to read snapshot file: {path}")]
    ReadSnapshot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Submission status may only move forward.
    #[error("Cannot move submission from {from} to {to}")]
    InvalidTransition {
        from: SubmissionStatus,
        to: SubmissionStatus,
    },
}

impl WizardError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Codec(e) => e.user_message(),
            Self::Persistence(e) => e.user_message(),
            Self::ReadSnapshot { path, .. } => {
                format!("Could not read the configuration file at {}", path.display())
            }
            Self::InvalidTransition { from, to } => {
                format!("A {from} submission cannot be marked {to}.")
            }
        }
    }
}

/// Result type alias for wizard operations.
pub type Result<T> = std::result::Result<T, WizardError>;
