//! Schema execution against partial form data.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use soc_model::{FormData, SectionRef, StepId};

use crate::issue::FieldIssue;
use crate::report::ValidationReport;
use crate::schema::{Advisory, Constraint, FieldPath, FieldRule, Requirement, schema_for};

/// Plausible email: one `@`, no whitespace, a dot in the domain part.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
});

/// Message reported when raw input cannot be read as form data.
const UNREADABLE_INPUT: &str = "The submitted data could not be read. Please review the form and try again.";

/// Borrowed value of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    List(Option<&'a BTreeSet<String>>),
}

impl<'a> FieldValue<'a> {
    /// Read the value at `path` from the form.
    pub fn read(form: &'a FormData, path: FieldPath) -> Self {
        match path {
            FieldPath::Section(section) => match form.get(section) {
                SectionRef::Text(value) => Self::Text(value),
                SectionRef::List(value) => Self::List(value),
                // Nested records are validated field by field
                SectionRef::Contact(_) => Self::Text(None),
            },
            FieldPath::Contact(field) => {
                Self::Text(form.contact_info.as_ref().and_then(|c| c.get(field)))
            }
        }
    }
}

/// Validate one step of the form.
///
/// Steps without a schema are always valid. Each invalid field reports
/// exactly one message; advisories go to `warnings` and never affect
/// validity.
pub fn validate(step: StepId, form: &FormData) -> ValidationReport {
    let mut report = ValidationReport::new(Some(step));
    let Some(schema) = schema_for(step) else {
        return report;
    };

    for rule in schema.fields {
        let required = is_required(rule, form);
        // A conditional field is ignored entirely while its condition is off.
        if !required && matches!(rule.requirement, Requirement::WhenEquals { .. }) {
            continue;
        }
        if let Some(issue) = check_value(rule, FieldValue::read(form, rule.path), required) {
            report.push(&issue);
        }
    }

    for advisory in schema.advisories {
        if let Some(issue) = check_advisory(advisory, form) {
            report.push(&issue);
        }
    }

    tracing::debug!(
        step = %step,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validated step"
    );
    report
}

/// Validate a single field for live feedback.
///
/// Uses the same rule as [`validate`]. Conditional requirements cannot be
/// evaluated without the sibling field, so only the field's own constraint
/// applies to a conditionally required value. Returns the error message, or
/// `None` when the field is valid or not part of the step's schema.
pub fn validate_field(step: StepId, field: &str, value: FieldValue<'_>) -> Option<String> {
    let rule = schema_for(step)?.rule(field)?;
    let required = matches!(rule.requirement, Requirement::Always);
    check_value(rule, value, required).map(|issue| issue.message())
}

/// Validate untyped input.
///
/// Unknown step identifiers validate successfully. Input that cannot be read
/// as form data yields a single field-less error; this never fails.
pub fn validate_raw(step_id: &str, data: &serde_json::Value) -> ValidationReport {
    let Some(step) = StepId::parse(step_id) else {
        tracing::debug!(step_id, "no schema for step, treating as valid");
        return ValidationReport::new(None);
    };

    match serde_json::from_value::<FormData>(data.clone()) {
        Ok(form) => validate(step, &form),
        Err(error) => {
            tracing::warn!(step = %step, %error, "could not read form data for validation");
            ValidationReport::general_error(Some(step), UNREADABLE_INPUT)
        }
    }
}

fn is_required(rule: &FieldRule, form: &FormData) -> bool {
    match rule.requirement {
        Requirement::Always => true,
        Requirement::Optional => false,
        Requirement::WhenEquals { field, value } => form.text(field).map(str::trim) == Some(value),
    }
}

/// Check presence first, then the constraint. The first violation wins.
fn check_value(rule: &FieldRule, value: FieldValue<'_>, required: bool) -> Option<FieldIssue> {
    let field = rule.path.key().to_string();
    let label = rule.label.to_string();

    match value {
        FieldValue::Text(text) => {
            let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
                return required.then_some(FieldIssue::Required { field, label });
            };
            match rule.constraint {
                Constraint::MinLength(min) if text.chars().count() < min => {
                    Some(FieldIssue::TooShort { field, label, min })
                }
                Constraint::Email if !EMAIL_REGEX.is_match(text) => {
                    Some(FieldIssue::InvalidEmail { field })
                }
                _ => None,
            }
        }
        FieldValue::List(items) => {
            let found = items.map_or(0, BTreeSet::len);
            if found == 0 {
                return required.then_some(FieldIssue::NoSelection { field, label });
            }
            match rule.constraint {
                Constraint::MinItems(min) if found < min => Some(FieldIssue::TooFewItems {
                    field,
                    label,
                    min,
                    found,
                }),
                _ => None,
            }
        }
    }
}

fn check_advisory(advisory: &Advisory, form: &FormData) -> Option<FieldIssue> {
    match *advisory {
        Advisory::MaxItems {
            section,
            label,
            max,
        } => {
            let found = form.list(section).map_or(0, BTreeSet::len);
            (found > max).then(|| FieldIssue::TooManyItems {
                field: section.as_str().to_string(),
                label: label.to_string(),
                max,
                found,
            })
        }
        Advisory::Recommended { field, label } => {
            let present = form
                .contact_info
                .as_ref()
                .and_then(|c| c.get(field))
                .is_some_and(|v| !v.trim().is_empty());
            (!present).then(|| FieldIssue::Recommended {
                field: field.as_str().to_string(),
                label: label.to_string(),
            })
        }
    }
}
