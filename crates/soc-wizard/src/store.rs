//! The wizard state store.

use std::path::Path;

use soc_model::{
    CompletedSteps, ContactField, FormData, SectionValue, StepId, TOTAL_COUNTED_STEPS,
};
use soc_persistence::{
    AutoSaveConfig, COMPLETED_STEPS_KEY, CodecError, DirtyTracker, FORM_DATA_KEY, KeyValueStore,
    PersistenceError,
};
use soc_validate::ValidationReport;

use crate::error::{Result, WizardError};
use crate::import::{ImportOutcome, ImportSequencer, ImportToken};
use crate::submission::Submission;

/// Owner of the live form and completed steps.
///
/// Mutations apply to memory immediately and mark the auto-save tracker
/// dirty; the actual write happens on [`poll_autosave`](Self::poll_autosave)
/// once the debounce has elapsed, or on [`flush`](Self::flush). Writes always
/// encode the current state.
#[derive(Debug)]
pub struct WizardStore<S: KeyValueStore> {
    storage: S,
    form: FormData,
    completed: CompletedSteps,
    tracker: DirtyTracker,
    config: AutoSaveConfig,
    imports: ImportSequencer,
}

impl<S: KeyValueStore> WizardStore<S> {
    /// Create a store hydrated from `storage`.
    ///
    /// Each persisted key degrades to empty on its own when it cannot be read
    /// or decoded.
    pub fn open(storage: S, config: AutoSaveConfig) -> Self {
        let form = hydrate_form(&storage);
        let completed = hydrate_completed(&storage);
        tracing::info!(
            sections = form.filled_sections().len(),
            completed = completed.len(),
            "opened wizard store"
        );

        Self {
            storage,
            form,
            completed,
            tracker: DirtyTracker::new(),
            config,
            imports: ImportSequencer::default(),
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn form_data(&self) -> &FormData {
        &self.form
    }

    pub fn completed_steps(&self) -> &CompletedSteps {
        &self.completed
    }

    pub fn config(&self) -> &AutoSaveConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Whether there are changes not yet written.
    pub fn is_dirty(&self) -> bool {
        self.tracker.is_dirty()
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Replace exactly one section.
    pub fn update(&mut self, value: SectionValue) {
        tracing::debug!(section = %value.section(), "updated section");
        self.form.apply(value);
        self.tracker.mark_dirty();
    }

    /// Replace one contact field, keeping the other contact fields.
    pub fn update_contact(&mut self, field: ContactField, value: Option<String>) {
        let mut contact = self.form.contact_info.clone().unwrap_or_default();
        contact.set(field, value);
        self.update(SectionValue::ContactInfo(Some(contact)));
    }

    /// Record `step` as completed. Returns `false` if it already was.
    pub fn mark_completed(&mut self, step: StepId) -> bool {
        let inserted = self.completed.insert(step);
        if inserted {
            tracing::info!(step = %step, "step completed");
            self.tracker.mark_dirty();
        }
        inserted
    }

    /// Clear all state and remove both persisted keys.
    ///
    /// Any pending debounced write is dropped. If removal fails the empty
    /// state is scheduled for writing instead.
    pub fn reset(&mut self) -> std::result::Result<(), PersistenceError> {
        self.form = FormData::new();
        self.completed.clear();
        self.tracker.cancel();

        let removed = self
            .storage
            .remove(FORM_DATA_KEY)
            .and_then(|()| self.storage.remove(COMPLETED_STEPS_KEY));
        match removed {
            Ok(()) => {
                tracing::info!("wizard state reset");
                Ok(())
            }
            Err(error) => {
                tracing::error!(%error, "failed to clear persisted wizard state");
                self.tracker.mark_dirty();
                Err(error)
            }
        }
    }

    // =========================================================================
    // AUTO-SAVE
    // =========================================================================

    /// Write the state if the debounce says a save is due.
    ///
    /// Returns `true` when a write succeeded. Failures are logged; the state
    /// stays dirty and the next change re-arms the save.
    pub fn poll_autosave(&mut self) -> bool {
        if !self.tracker.should_auto_save(&self.config) {
            return false;
        }
        tracing::debug!("auto-saving wizard state");
        self.persist().is_ok()
    }

    /// Write the state now if anything changed.
    pub fn flush(&mut self) -> std::result::Result<(), PersistenceError> {
        if !self.tracker.is_dirty() {
            return Ok(());
        }
        self.persist()
    }

    fn persist(&mut self) -> std::result::Result<(), PersistenceError> {
        self.tracker.start_save();
        match self.write_state() {
            Ok(()) => {
                self.tracker.save_complete();
                Ok(())
            }
            Err(error) => {
                self.tracker.save_failed();
                tracing::error!(%error, "failed to save wizard state");
                Err(error)
            }
        }
    }

    fn write_state(&mut self) -> std::result::Result<(), PersistenceError> {
        let form = encode(&self.form)?;
        let completed = encode(&self.completed)?;
        self.storage.set(FORM_DATA_KEY, &form)?;
        self.storage.set(COMPLETED_STEPS_KEY, &completed)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Share of working steps completed, rounded half-up to a whole percent.
    ///
    /// Only counted steps enter the numerator; welcome and review do not.
    pub fn completion_percentage(&self) -> u8 {
        let done = self.completed.counted_len();
        let percent = (done * 200 + TOTAL_COUNTED_STEPS) / (2 * TOTAL_COUNTED_STEPS);
        u8::try_from(percent.min(100)).unwrap_or(100)
    }

    /// Validate one step against the current form.
    pub fn validate_step(&self, step: StepId) -> ValidationReport {
        soc_validate::validate(step, &self.form)
    }

    /// Whether the user may navigate to `step` from `current_index`.
    pub fn is_reachable(&self, step: StepId, current_index: usize) -> bool {
        soc_model::is_reachable(step, &self.completed, current_index)
    }

    /// First working step not yet completed.
    pub fn next_incomplete_step(&self) -> Option<StepId> {
        StepId::counted()
            .iter()
            .copied()
            .find(|step| !self.completed.contains(*step))
    }

    /// Draft submission owning a copy of the form.
    pub fn to_submission(&self) -> Submission {
        Submission::draft(self.form.clone())
    }

    // =========================================================================
    // IMPORT / EXPORT
    // =========================================================================

    /// Encode the current state as snapshot text.
    pub fn export_snapshot(&self) -> std::result::Result<String, CodecError> {
        soc_persistence::serialize(&self.form, &self.completed)
    }

    /// Replace the state with a decoded snapshot.
    ///
    /// On failure the state is left untouched.
    pub fn import_snapshot(&mut self, text: &str) -> std::result::Result<(), CodecError> {
        let token = self.begin_import();
        self.complete_import(token, text).map(|_| ())
    }

    /// Start an import attempt. Starting another one supersedes this token.
    pub fn begin_import(&mut self) -> ImportToken {
        self.imports.begin()
    }

    /// Apply snapshot text read for `token`.
    ///
    /// Results for superseded tokens are discarded without decoding.
    pub fn complete_import(
        &mut self,
        token: ImportToken,
        text: &str,
    ) -> std::result::Result<ImportOutcome, CodecError> {
        if !self.imports.is_current(token) {
            tracing::info!(token = token.value(), "discarding superseded import");
            return Ok(ImportOutcome::Superseded);
        }

        let (form, completed) = soc_persistence::deserialize(text)?;
        self.imports.mark_applied(token);
        self.form = form;
        self.completed = completed;
        self.tracker.mark_dirty();
        tracing::info!(
            token = token.value(),
            completed = self.completed.len(),
            "imported snapshot"
        );
        Ok(ImportOutcome::Applied)
    }

    /// Read a snapshot file and import it.
    pub fn import_file(&mut self, path: &Path) -> Result<ImportOutcome> {
        let token = self.begin_import();
        let text = std::fs::read_to_string(path).map_err(|e| WizardError::ReadSnapshot {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(self.complete_import(token, &text)?)
    }
}

fn encode<T: serde::Serialize>(value: &T) -> std::result::Result<String, PersistenceError> {
    serde_json::to_string(value).map_err(|e| PersistenceError::Serialization {
        source: Box::new(e),
    })
}

fn hydrate_form<S: KeyValueStore>(storage: &S) -> FormData {
    match storage.get(FORM_DATA_KEY) {
        Ok(Some(text)) => serde_json::from_str(&text).unwrap_or_else(|error| {
            tracing::warn!(key = FORM_DATA_KEY, %error, "discarding malformed form data");
            FormData::new()
        }),
        Ok(None) => FormData::new(),
        Err(error) => {
            tracing::warn!(key = FORM_DATA_KEY, %error, "could not read form data");
            FormData::new()
        }
    }
}

/// Unknown step ids are dropped; anything that is not a list of strings
/// yields an empty set.
fn hydrate_completed<S: KeyValueStore>(storage: &S) -> CompletedSteps {
    let text = match storage.get(COMPLETED_STEPS_KEY) {
        Ok(Some(text)) => text,
        Ok(None) => return CompletedSteps::new(),
        Err(error) => {
            tracing::warn!(key = COMPLETED_STEPS_KEY, %error, "could not read completed steps");
            return CompletedSteps::new();
        }
    };

    match serde_json::from_str::<Vec<String>>(&text) {
        Ok(ids) => ids
            .iter()
            .filter_map(|id| {
                let step = StepId::parse(id);
                if step.is_none() {
                    tracing::warn!(id = %id, "dropping unknown completed step");
                }
                step
            })
            .collect(),
        Err(error) => {
            tracing::warn!(key = COMPLETED_STEPS_KEY, %error, "discarding malformed completed steps");
            CompletedSteps::new()
        }
    }
}
