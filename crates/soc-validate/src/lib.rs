//! Step validation for the SOC configuration wizard.
//!
//! - **Schema registry** (`schema`): one static rule table per step
//! - **Engine** (`validate`, `validate_field`, `validate_raw`): runs a schema
//!   against partial form data and returns a [`ValidationReport`]
//!
//! Validation failures are data, never errors: an invalid step produces a
//! report with field-level messages, and advisory warnings never block.
//!
//! # Example
//!
//! ```
//! use soc_model::{FormData, SectionValue, StepId};
//! use soc_validate::validate;
//!
//! let mut form = FormData::new();
//! form.apply(SectionValue::IndustryFocus(Some("Other".into())));
//!
//! let report = validate(StepId::IndustryFocus, &form);
//! assert!(!report.is_valid());
//! assert!(report.error("otherIndustry").is_some());
//! ```

mod engine;
mod issue;
mod report;
pub mod schema;

pub use engine::{FieldValue, validate, validate_field, validate_raw};
pub use issue::{FieldIssue, Severity};
pub use report::{GENERAL_ERROR_KEY, ValidationReport};
pub use schema::{FieldPath, Schema, schema_for, schema_for_id};
