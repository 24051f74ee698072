//! Snapshot import/export codec.
//!
//! A snapshot is pretty-printed JSON holding the form, the completed steps,
//! an RFC 3339 export timestamp and a format version. Decoding is
//! all-or-nothing: any structural problem rejects the whole snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use soc_model::{CompletedSteps, FormData, StepId};

use crate::error::CodecError;

/// Format version written into every snapshot.
pub const SNAPSHOT_VERSION: &str = "1.0";

const FORM_DATA: &str = "formData";
const COMPLETED_STEPS: &str = "completedSteps";
const VERSION: &str = "version";

/// Portable export of the wizard state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSnapshot {
    pub form_data: FormData,
    pub completed_steps: CompletedSteps,
    pub exported_at: DateTime<Utc>,
    pub version: String,
}

impl ConfigurationSnapshot {
    /// Snapshot of copies of the given state, stamped with `exported_at`.
    pub fn new(form: &FormData, completed: &CompletedSteps, exported_at: DateTime<Utc>) -> Self {
        Self {
            form_data: form.clone(),
            completed_steps: completed.clone(),
            exported_at,
            version: SNAPSHOT_VERSION.to_string(),
        }
    }
}

/// Encode the state as snapshot text stamped with the current time.
pub fn serialize(form: &FormData, completed: &CompletedSteps) -> Result<String, CodecError> {
    serialize_at(form, completed, Utc::now())
}

/// Encode the state as snapshot text with an explicit timestamp.
pub fn serialize_at(
    form: &FormData,
    completed: &CompletedSteps,
    exported_at: DateTime<Utc>,
) -> Result<String, CodecError> {
    let snapshot = ConfigurationSnapshot::new(form, completed, exported_at);
    serde_json::to_string_pretty(&snapshot).map_err(CodecError::Serialization)
}

/// Decode snapshot text into copies of the form and completed steps.
///
/// Any version string, or none, is accepted; a version other than
/// [`SNAPSHOT_VERSION`] is logged and the content decoded best-effort.
pub fn deserialize(text: &str) -> Result<(FormData, CompletedSteps), CodecError> {
    let root: Value = serde_json::from_str(text).map_err(CodecError::Malformed)?;
    let Value::Object(mut root) = root else {
        return Err(CodecError::NotAnObject);
    };

    let form_value = root
        .remove(FORM_DATA)
        .ok_or(CodecError::MissingKey(FORM_DATA))?;
    let steps_value = root
        .remove(COMPLETED_STEPS)
        .ok_or(CodecError::MissingKey(COMPLETED_STEPS))?;

    match root.get(VERSION).and_then(Value::as_str) {
        Some(SNAPSHOT_VERSION) => {}
        Some(found) => {
            tracing::warn!(found, expected = SNAPSHOT_VERSION, "snapshot version mismatch");
        }
        None => tracing::warn!(expected = SNAPSHOT_VERSION, "snapshot has no version"),
    }

    let form: FormData = serde_json::from_value(form_value).map_err(CodecError::InvalidFormData)?;
    let completed = decode_steps(&steps_value)?;

    tracing::debug!(
        sections = form.filled_sections().len(),
        completed = completed.len(),
        "decoded snapshot"
    );
    Ok((form, completed))
}

fn decode_steps(value: &Value) -> Result<CompletedSteps, CodecError> {
    let Value::Array(items) = value else {
        return Err(CodecError::InvalidCompletedSteps);
    };

    let mut completed = CompletedSteps::new();
    for item in items {
        let id = item.as_str().ok_or(CodecError::InvalidCompletedSteps)?;
        let step = StepId::parse(id).ok_or_else(|| CodecError::UnknownStep(id.to_string()))?;
        if !completed.insert(step) {
            return Err(CodecError::DuplicateStep(id.to_string()));
        }
    }
    Ok(completed)
}
