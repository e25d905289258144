//! Background writer for persisted values.
//!
//! Writes are queued on an unbounded channel and applied by one task in
//! submission order, so the last queued value is the one that sticks.
//! Store calls may block, so each one runs on tokio's blocking pool and is
//! awaited before the next command is taken. Failures are logged and
//! dropped.

use crate::core::History;
use crate::storage::{write_history, write_theme, KeyValueStore, StorageError};
use crate::theme::Theme;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::{self, JoinError};
use tracing::{debug, warn};

enum PersistCommand {
    History(History),
    Theme(Theme),
    Flush(oneshot::Sender<()>),
}

/// Sending half of the writer task. Dropping it stops the task once the
/// queue drains.
pub(crate) struct PersistHandle {
    tx: mpsc::UnboundedSender<PersistCommand>,
}

impl PersistHandle {
    /// Spawn the writer on the current tokio runtime.
    pub(crate) fn spawn(
        store: Arc<dyn KeyValueStore>,
        history_key: String,
        theme_key: String,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(store, history_key, theme_key, rx));
        Self { tx }
    }

    pub(crate) fn history(&self, history: History) {
        self.send(PersistCommand::History(history));
    }

    pub(crate) fn theme(&self, theme: Theme) {
        self.send(PersistCommand::Theme(theme));
    }

    /// Wait until every write queued so far has been applied.
    pub(crate) async fn flush(&self) {
        let (ack, done) = oneshot::channel();
        self.send(PersistCommand::Flush(ack));
        let _ = done.await;
    }

    fn send(&self, command: PersistCommand) {
        if self.tx.send(command).is_err() {
            warn!("Persistence writer has stopped; write dropped");
        }
    }
}

async fn run(
    store: Arc<dyn KeyValueStore>,
    history_key: String,
    theme_key: String,
    mut rx: mpsc::UnboundedReceiver<PersistCommand>,
) {
    debug!("Persistence writer started");

    while let Some(command) = rx.recv().await {
        match command {
            PersistCommand::History(history) => {
                let entries = history.len();
                let key = history_key.clone();
                match off_runtime(&store, move |store| write_history(store, &key, &history)).await
                {
                    Ok(Ok(())) => debug!(entries, "History persisted"),
                    Ok(Err(e)) => warn!(key = %history_key, error = %e, "History write failed"),
                    Err(e) => warn!(key = %history_key, error = %e, "History write aborted"),
                }
            }
            PersistCommand::Theme(theme) => {
                let key = theme_key.clone();
                match off_runtime(&store, move |store| write_theme(store, &key, theme)).await {
                    Ok(Ok(())) => debug!(%theme, "Theme persisted"),
                    Ok(Err(e)) => warn!(key = %theme_key, error = %e, "Theme write failed"),
                    Err(e) => warn!(key = %theme_key, error = %e, "Theme write aborted"),
                }
            }
            PersistCommand::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }

    debug!("Persistence writer stopped");
}

/// Run a store call on the blocking pool so file I/O never holds a runtime
/// worker.
async fn off_runtime<F>(
    store: &Arc<dyn KeyValueStore>,
    write: F,
) -> Result<Result<(), StorageError>, JoinError>
where
    F: FnOnce(&dyn KeyValueStore) -> Result<(), StorageError> + Send + 'static,
{
    let store = Arc::clone(store);
    task::spawn_blocking(move || write(store.as_ref())).await
}
