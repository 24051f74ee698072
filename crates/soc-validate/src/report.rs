//! Validation result for one step.

use std::collections::BTreeMap;

use serde::Serialize;
use soc_model::StepId;

use crate::issue::{FieldIssue, Severity};

/// Key under which field-less failures are reported.
pub const GENERAL_ERROR_KEY: &str = "_form";

/// Outcome of validating one step.
///
/// `errors` block progression; `warnings` never do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Step that was validated (`None` for unknown identifiers).
    pub step: Option<StepId>,
    /// One message per invalid field.
    pub errors: BTreeMap<String, String>,
    /// Advisory messages.
    pub warnings: BTreeMap<String, String>,
}

impl ValidationReport {
    /// Create an empty (valid) report.
    pub fn new(step: Option<StepId>) -> Self {
        Self {
            step,
            ..Default::default()
        }
    }

    /// Report carrying a single field-less error.
    pub fn general_error(step: Option<StepId>, message: impl Into<String>) -> Self {
        let mut report = Self::new(step);
        report
            .errors
            .insert(GENERAL_ERROR_KEY.to_string(), message.into());
        report
    }

    /// Whether the step may be completed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any advisory was raised.
    #[inline]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Record an issue in the map matching its severity.
    ///
    /// The first issue recorded for a field wins.
    pub fn push(&mut self, issue: &FieldIssue) {
        let target = match issue.severity() {
            Severity::Error => &mut self.errors,
            Severity::Warning => &mut self.warnings,
        };
        target
            .entry(issue.field().to_string())
            .or_insert_with(|| issue.message());
    }

    /// Replace a single field's error entry with a fresh single-field result.
    ///
    /// Other entries are left untouched.
    pub fn apply_field(&mut self, field: &str, error: Option<String>) {
        match error {
            Some(message) => {
                self.errors.insert(field.to_string(), message);
            }
            None => {
                self.errors.remove(field);
            }
        }
    }

    /// Error message for a field.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Warning message for a field.
    pub fn warning(&self, field: &str) -> Option<&str> {
        self.warnings.get(field).map(String::as_str)
    }
}
