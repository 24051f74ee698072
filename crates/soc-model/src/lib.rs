//! Data model for the SOC configuration wizard.
//!
//! - [`FormData`]: the accumulating answers, one optional field per section
//! - [`Section`] / [`SectionValue`]: typed keys and replacement values
//! - [`StepId`]: the fixed wizard sequence and reachability rules
//! - [`CompletedSteps`]: insertion-ordered set of finished steps

mod error;
mod form;
mod section;
mod step;

pub use error::ModelError;
pub use form::{ContactInfo, FormData, SectionRef};
pub use section::{ContactField, OTHER_INDUSTRY, Section, SectionKind, SectionValue};
pub use step::{CompletedSteps, StepId, TOTAL_COUNTED_STEPS, is_reachable, step_index};
