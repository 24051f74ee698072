//! Auto-save bookkeeping for wizard state.
//!
//! Provides:
//! - `DirtyTracker` - Tracks unsaved changes with debounce
//! - `AutoSaveConfig` - Settings for debounce and forced saves

mod config;
mod tracker;

pub use config::AutoSaveConfig;
pub use tracker::DirtyTracker;
