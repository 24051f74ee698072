//! Wizard state store for the SOC configuration wizard.
//!
//! [`WizardStore`] owns the live form and the completed-step list, persists
//! them through a [`KeyValueStore`](soc_persistence::KeyValueStore) with
//! debounced auto-save, and handles snapshot import/export.
//!
//! The store is an ordinary value: the application shell creates it, passes
//! it by reference, and wraps it in a [`SharedStore`] when a background
//! auto-save task needs access.

mod autosave;
mod error;
mod import;
mod store;
mod submission;

pub use autosave::{DEFAULT_TICK, SharedStore, import_file_async, spawn_autosave};
pub use error::{Result, WizardError};
pub use import::{ImportOutcome, ImportToken};
pub use store::WizardStore;
pub use submission::{Submission, SubmissionStatus};
