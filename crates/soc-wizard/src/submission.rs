//! Submission records built from a finished wizard.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use soc_model::FormData;
use uuid::Uuid;

use crate::error::{Result, WizardError};

/// Lifecycle of a submission. Statuses only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Draft,
    Submitted,
    Reviewed,
    Completed,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Reviewed => "reviewed",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configuration handed off for review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub form_data: FormData,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Submission {
    /// New draft owning a copy of the form.
    pub fn draft(form_data: FormData) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            form_data,
            status: SubmissionStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Move to a later status.
    pub fn advance(&mut self, to: SubmissionStatus) -> Result<()> {
        if to <= self.status {
            return Err(WizardError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Shorthand for advancing to [`SubmissionStatus::Submitted`].
    pub fn submit(&mut self) -> Result<()> {
        self.advance(SubmissionStatus::Submitted)
    }
}
