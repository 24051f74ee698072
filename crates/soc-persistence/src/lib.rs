//! Persistence for the SOC configuration wizard.
//!
//! This crate owns everything that leaves process memory:
//!
//! - **Key-value stores** ([`KeyValueStore`]): the opaque persistence
//!   collaborator, with an in-memory implementation for tests and a
//!   directory-backed one with atomic writes
//! - **Auto-save** ([`DirtyTracker`], [`AutoSaveConfig`]): debounce
//!   bookkeeping that decides when a write is due
//! - **Snapshot codec** ([`serialize`], [`deserialize`]): the portable JSON
//!   import/export format
//!
//! # Snapshot Format
//!
//! ```text
//! {
//!   "formData": { "title": "...", "corePlatforms": ["..."], ... },
//!   "completedSteps": ["project-overview", ...],
//!   "exportedAt": "2026-01-01T00:00:00Z",
//!   "version": "1.0"
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use soc_model::{CompletedSteps, FormData, StepId};
//! use soc_persistence::{deserialize, serialize};
//!
//! let mut form = FormData::new();
//! form.title = Some("Edge gateway".into());
//! let steps: CompletedSteps = [StepId::ProjectOverview].into_iter().collect();
//!
//! let text = serialize(&form, &steps)?;
//! let (form2, steps2) = deserialize(&text)?;
//! assert_eq!((form, steps), (form2, steps2));
//! # Ok::<(), soc_persistence::CodecError>(())
//! ```

mod autosave;
mod codec;
mod error;
mod store;

pub use autosave::{AutoSaveConfig, DirtyTracker};
pub use codec::{ConfigurationSnapshot, SNAPSHOT_VERSION, deserialize, serialize, serialize_at};
pub use error::{CodecError, PersistenceError, Result};
pub use store::{COMPLETED_STEPS_KEY, FORM_DATA_KEY, FileStore, KeyValueStore, MemoryStore};
