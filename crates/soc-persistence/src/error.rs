//! Persistence and codec error types.
//!
//! All persistence operations return structured errors that provide
//! user-friendly messages and optional remediation hints.

use std::path::PathBuf;
use thiserror::Error;

/// Storage operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// State could not be encoded for storage.
    #[error("Failed to serialize wizard state")]
    Serialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The backing store refused the operation.
    #[error("Storage unavailable for key '{key}': {reason}")]
    Unavailable { key: String, reason: String },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save your progress to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::Serialization { .. } => {
                "An error occurred while saving your configuration.".to_string()
            }
            Self::Unavailable { .. } => {
                "Saved progress is not available right now. Your changes are kept in memory."
                    .to_string()
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different state directory.".into())
            }
            Self::Serialization { .. } => None,
            Self::Unavailable { .. } => {
                Some("Export a snapshot to keep a copy of your configuration.".into())
            }
        }
    }
}

/// Snapshot import/export error.
///
/// Any failure rejects the whole snapshot; nothing is partially applied.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Text is not JSON.
    #[error("Snapshot is not valid JSON")]
    Malformed(#[source] serde_json::Error),

    /// JSON root is not an object.
    #[error("Snapshot root must be an object")]
    NotAnObject,

    /// A required top-level key is absent.
    #[error("Snapshot is missing '{0}'")]
    MissingKey(&'static str),

    /// `formData` does not decode as form data.
    #[error("Snapshot formData is invalid")]
    InvalidFormData(#[source] serde_json::Error),

    /// `completedSteps` is not an array of strings.
    #[error("Snapshot completedSteps must be an array of step ids")]
    InvalidCompletedSteps,

    /// `completedSteps` names a step that does not exist.
    #[error("Unknown step '{0}' in completedSteps")]
    UnknownStep(String),

    /// `completedSteps` lists a step twice.
    #[error("Step '{0}' appears more than once in completedSteps")]
    DuplicateStep(String),

    /// Snapshot could not be encoded.
    #[error("Failed to serialize snapshot")]
    Serialization(#[source] serde_json::Error),
}

impl CodecError {
    /// Single user-facing message for a failed import or export.
    pub fn user_message(&self) -> String {
        match self {
            Self::Serialization(_) => {
                "Your configuration could not be exported. Please try again.".to_string()
            }
            Self::Malformed(_) | Self::NotAnObject | Self::MissingKey(_) => {
                "Invalid configuration file format. Please select a file exported from the configurator."
                    .to_string()
            }
            Self::InvalidFormData(_)
            | Self::InvalidCompletedSteps
            | Self::UnknownStep(_)
            | Self::DuplicateStep(_) => {
                format!("Invalid configuration file format: {self}.")
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_suggestion_depends_on_operation() {
        let read = PersistenceError::Io {
            operation: "read",
            path: PathBuf::from("state/soc_form_data.json"),
            source: std::io::Error::other("denied"),
        };
        assert!(read.suggestion().unwrap().contains("read"));
        assert!(read.user_message().contains("soc_form_data.json"));
    }

    #[test]
    fn test_codec_user_message_names_problem() {
        let err = CodecError::UnknownStep("warp-drive".into());
        assert_eq!(
            err.user_message(),
            "Invalid configuration file format: Unknown step 'warp-drive' in completedSteps."
        );
        assert!(
            CodecError::NotAnObject
                .user_message()
                .starts_with("Invalid configuration file format")
        );
    }
}
