//! Dirty state tracking for auto-save.

use std::time::Instant;

use super::AutoSaveConfig;

/// Tracks unsaved changes to the wizard state.
///
/// A failed write keeps the state dirty but holds further attempts until the
/// next change, so a broken backend is not hammered on every poll.
#[derive(Debug, Clone, Default)]
pub struct DirtyTracker {
    dirty: bool,
    last_change: Option<Instant>,
    /// Reset when saved.
    first_unsaved_change: Option<Instant>,
    saving: bool,
    /// Set by a failed write, cleared by the next change.
    held: bool,
}

impl DirtyTracker {
    /// Create a new tracker with no unsaved changes.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Whether a failed write is waiting for the next change.
    #[inline]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Record a change.
    pub fn mark_dirty(&mut self) {
        let now = Instant::now();
        self.dirty = true;
        self.held = false;
        self.last_change = Some(now);

        if self.first_unsaved_change.is_none() {
            self.first_unsaved_change = Some(now);
        }
    }

    pub fn start_save(&mut self) {
        self.saving = true;
    }

    pub fn save_complete(&mut self) {
        self.dirty = false;
        self.saving = false;
        self.held = false;
        self.first_unsaved_change = None;
    }

    /// Mark that a write failed. State stays dirty.
    pub fn save_failed(&mut self) {
        self.saving = false;
        self.held = true;
    }

    /// Forget any pending change without writing it.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Milliseconds since the last change.
    pub fn ms_since_last_change(&self) -> Option<u64> {
        self.last_change.map(elapsed_ms)
    }

    /// Milliseconds since the first unsaved change.
    pub fn ms_since_first_unsaved(&self) -> Option<u64> {
        self.first_unsaved_change.map(elapsed_ms)
    }

    /// Check if an auto-save is due under `config`.
    pub fn should_auto_save(&self, config: &AutoSaveConfig) -> bool {
        if !self.dirty || self.saving || self.held || !config.enabled {
            return false;
        }

        match (self.ms_since_last_change(), self.ms_since_first_unsaved()) {
            (Some(since_last), Some(since_first)) => config.should_save(since_last, since_first),
            _ => false,
        }
    }
}

fn elapsed_ms(instant: Instant) -> u64 {
    u64::try_from(instant.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_new_tracker_is_clean() {
        let tracker = DirtyTracker::new();
        assert!(!tracker.is_dirty());
        assert!(!tracker.is_saving());
        assert!(!tracker.is_held());
    }

    #[test]
    fn test_save_complete() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_dirty();
        tracker.start_save();
        assert!(tracker.is_saving());

        tracker.save_complete();
        assert!(!tracker.is_dirty());
        assert!(tracker.ms_since_first_unsaved().is_none());
    }

    #[test]
    fn test_failed_save_waits_for_next_change() {
        let config = AutoSaveConfig::immediate();
        let mut tracker = DirtyTracker::new();
        tracker.mark_dirty();
        tracker.start_save();
        tracker.save_failed();

        assert!(tracker.is_dirty());
        assert!(!tracker.should_auto_save(&config));

        tracker.mark_dirty();
        assert!(tracker.should_auto_save(&config));
    }

    #[test]
    fn test_cancel_drops_pending_change() {
        let config = AutoSaveConfig::immediate();
        let mut tracker = DirtyTracker::new();
        tracker.mark_dirty();
        tracker.cancel();
        assert!(!tracker.is_dirty());
        assert!(!tracker.should_auto_save(&config));
    }

    #[test]
    fn test_should_auto_save_timing() {
        let mut tracker = DirtyTracker::new();
        let config = AutoSaveConfig {
            debounce_ms: 50,
            ..Default::default()
        };

        assert!(!tracker.should_auto_save(&config));

        tracker.mark_dirty();
        assert!(!tracker.should_auto_save(&config));

        thread::sleep(Duration::from_millis(60));
        assert!(tracker.should_auto_save(&config));

        tracker.start_save();
        assert!(!tracker.should_auto_save(&config));
    }
}
