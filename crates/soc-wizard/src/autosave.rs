//! Background tasks around a shared store.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use soc_persistence::KeyValueStore;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::error::{Result, WizardError};
use crate::import::ImportOutcome;
use crate::store::WizardStore;

/// Store shared between the shell and background tasks.
pub type SharedStore<S> = Arc<Mutex<WizardStore<S>>>;

/// Default auto-save poll interval.
pub const DEFAULT_TICK: Duration = Duration::from_millis(500);

/// Poll the store's auto-save every `tick` until the task is aborted.
///
/// Each poll holds the lock and writes the state current at that moment, so
/// a reset between ticks leaves nothing to write.
pub fn spawn_autosave<S>(store: SharedStore<S>, tick: Duration) -> JoinHandle<()>
where
    S: KeyValueStore + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::debug!(?tick, "auto-save task started");

        loop {
            interval.tick().await;
            store.lock().await.poll_autosave();
        }
    })
}

/// Import a snapshot file without holding the lock during the read.
///
/// The token is taken before reading, so if another import starts while
/// this one is reading, this result is discarded.
pub async fn import_file_async<S: KeyValueStore>(
    store: &SharedStore<S>,
    path: impl Into<PathBuf>,
) -> Result<ImportOutcome> {
    let path = path.into();
    let token = store.lock().await.begin_import();

    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| WizardError::ReadSnapshot {
            path: path.clone(),
            source: e,
        })?;

    Ok(store.lock().await.complete_import(token, &text)?)
}
