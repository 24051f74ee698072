//! Import ordering.
//!
//! Every import attempt takes a token when it starts. Only the most recently
//! issued token may apply its result, so a slow earlier read can never
//! overwrite a later one.

/// Ticket for one import attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImportToken(u64);

impl ImportToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Result of completing an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The snapshot replaced the wizard state.
    Applied,
    /// A newer import was started; this result was discarded.
    Superseded,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ImportSequencer {
    issued: u64,
    applied: u64,
}

impl ImportSequencer {
    pub(crate) fn begin(&mut self) -> ImportToken {
        self.issued += 1;
        ImportToken(self.issued)
    }

    /// Whether `token` is the newest issued and not yet applied.
    pub(crate) fn is_current(&self, token: ImportToken) -> bool {
        token.0 == self.issued && token.0 > self.applied
    }

    pub(crate) fn mark_applied(&mut self, token: ImportToken) {
        self.applied = token.0;
    }
}
