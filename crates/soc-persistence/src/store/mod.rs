//! Key-value persistence collaborators.
//!
//! The wizard persists two string values under fixed keys. Backends only see
//! opaque strings; encoding happens in the wizard store.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Key holding the JSON-encoded form data.
pub const FORM_DATA_KEY: &str = "soc_form_data";

/// Key holding the JSON array of completed step ids.
pub const COMPLETED_STEPS_KEY: &str = "soc_completed_steps";

/// String key-value storage.
pub trait KeyValueStore: Send {
    /// Value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<()>;
}
