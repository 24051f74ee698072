//! Field-level validation issue types.
//!
//! The FieldIssue enum provides type-safe issue creation where
//! each variant carries only its needed data.

use serde::{Deserialize, Serialize};

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Blocks progression past the step
    Error,
    /// Advisory only, never blocks
    Warning,
}

impl Severity {
    /// Parse severity from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// Validation issue for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldIssue {
    // Blocking checks
    /// Required text field is missing or blank
    Required { field: String, label: String },
    /// Required multi-select has no selection
    NoSelection { field: String, label: String },
    /// Text shorter than the minimum length
    TooShort {
        field: String,
        label: String,
        min: usize,
    },
    /// Multi-select has fewer items than the minimum
    TooFewItems {
        field: String,
        label: String,
        min: usize,
        found: usize,
    },
    /// Value is not a plausible email address
    InvalidEmail { field: String },

    // Advisory checks
    /// Multi-select has more items than recommended
    TooManyItems {
        field: String,
        label: String,
        max: usize,
        found: usize,
    },
    /// Optional field is recommended but missing
    Recommended { field: String, label: String },
}

impl FieldIssue {
    /// Field key (all issues have one).
    pub fn field(&self) -> &str {
        match self {
            FieldIssue::Required { field, .. } => field,
            FieldIssue::NoSelection { field, .. } => field,
            FieldIssue::TooShort { field, .. } => field,
            FieldIssue::TooFewItems { field, .. } => field,
            FieldIssue::InvalidEmail { field } => field,
            FieldIssue::TooManyItems { field, .. } => field,
            FieldIssue::Recommended { field, .. } => field,
        }
    }

    /// Severity for this issue type.
    pub fn severity(&self) -> Severity {
        match self {
            FieldIssue::TooManyItems { .. } | FieldIssue::Recommended { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// User-facing message.
    pub fn message(&self) -> String {
        match self {
            FieldIssue::Required { label, .. } => format!("{label} is required"),
            FieldIssue::NoSelection { label, .. } => {
                format!("Please select at least one option for {label}")
            }
            FieldIssue::TooShort { label, min, .. } => {
                format!("{label} must be at least {min} characters")
            }
            FieldIssue::TooFewItems {
                label, min, found, ..
            } => format!("Please select at least {min} options for {label} ({found} selected)"),
            FieldIssue::InvalidEmail { .. } => "Please enter a valid email address".to_string(),
            FieldIssue::TooManyItems {
                label, max, found, ..
            } => format!(
                "{found} {} selected; consider focusing on {max} or fewer",
                label.to_lowercase()
            ),
            FieldIssue::Recommended { label, .. } => {
                format!("Adding a {} helps us follow up on your request", label.to_lowercase())
            }
        }
    }
}
