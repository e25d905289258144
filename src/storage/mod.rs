//! Persistence of history and theme through an injected key-value store.
//!
//! This module is part of the "imperative shell": the pure core never
//! touches storage. Hosts pick a [`KeyValueStore`] implementation and the
//! session reads/writes through it.
//!
//! # Key Concepts
//!
//! - **KeyValueStore**: minimal `get`/`set` string contract
//! - **Codecs**: `read_*`/`write_*` functions mapping stored strings to
//!   `History` and `Theme`
//! - **Effects**: the same operations as Stillwater effects over a
//!   [`StorageEnv`], run with `.run(&env).await`

mod effects;
pub mod error;
mod file;
mod memory;

pub use effects::{load_history, load_theme, save_history, save_theme, StorageEnv};
pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::core::History;
use crate::theme::Theme;
use tracing::debug;

/// Minimal string key-value persistence.
///
/// Implementations must be shareable across threads; the session writes
/// from a background task.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read and decode the history stored under `key`.
///
/// Returns `Ok(None)` when nothing is stored and
/// [`StorageError::CorruptHistory`] when the value is not a JSON array of
/// entries.
pub fn read_history(store: &dyn KeyValueStore, key: &str) -> Result<Option<History>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str::<History>(&raw)
        .map(Some)
        .map_err(|e| StorageError::CorruptHistory {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

/// Encode and store `history` under `key`.
pub fn write_history(
    store: &dyn KeyValueStore,
    key: &str,
    history: &History,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(history)
        .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
    store.set(key, &json)
}

/// Read the theme stored under `key`.
///
/// Anything other than `"light"` or `"dark"` is ignored and reads as
/// `None`.
pub fn read_theme(store: &dyn KeyValueStore, key: &str) -> Result<Option<Theme>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match raw.parse::<Theme>() {
        Ok(theme) => Ok(Some(theme)),
        Err(e) => {
            debug!(key, error = %e, "Ignoring stored theme");
            Ok(None)
        }
    }
}

pub fn write_theme(store: &dyn KeyValueStore, key: &str, theme: Theme) -> Result<(), StorageError> {
    store.set(key, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HistoryEntry, Operator};

    fn sample_history() -> History {
        History::new().record(HistoryEntry {
            operand1: "50".to_string(),
            operand2: "10".to_string(),
            operator: Operator::Percent,
            result: "5".to_string(),
        })
    }

    #[test]
    fn history_round_trips_through_store() {
        let store = MemoryStore::new();
        write_history(&store, "history", &sample_history()).unwrap();

        assert_eq!(
            store.get("history").unwrap().unwrap(),
            r#"[{"operand1":"50","operand2":"10","operator":"%","result":"5"}]"#
        );
        assert_eq!(read_history(&store, "history").unwrap(), Some(sample_history()));
    }

    #[test]
    fn absent_history_is_none() {
        let store = MemoryStore::new();
        assert_eq!(read_history(&store, "history").unwrap(), None);
    }

    #[test]
    fn malformed_history_is_corrupt() {
        let store = MemoryStore::with_entries([("history", "{oops")]);
        let result = read_history(&store, "history");
        assert!(matches!(
            result,
            Err(StorageError::CorruptHistory { ref key, .. }) if key == "history"
        ));
    }

    #[test]
    fn unknown_operator_in_history_is_corrupt() {
        let store = MemoryStore::with_entries([(
            "history",
            r#"[{"operand1":"1","operand2":"2","operator":"^","result":"1"}]"#,
        )]);
        assert!(read_history(&store, "history").is_err());
    }

    #[test]
    fn invalid_theme_is_ignored() {
        let store = MemoryStore::with_entries([("theme", "sepia")]);
        assert_eq!(read_theme(&store, "theme").unwrap(), None);
    }

    #[test]
    fn theme_round_trips() {
        let store = MemoryStore::new();
        write_theme(&store, "theme", Theme::Dark).unwrap();
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
        assert_eq!(read_theme(&store, "theme").unwrap(), Some(Theme::Dark));
    }
}
