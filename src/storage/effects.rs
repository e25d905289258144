//! Storage operations as Stillwater effects.
//!
//! Each constructor returns `impl Effect` describing the operation; nothing
//! touches the store until the effect is run against a [`StorageEnv`].

use super::error::StorageError;
use super::{read_history, read_theme, write_history, write_theme, KeyValueStore};
use crate::core::History;
use crate::theme::Theme;
use std::sync::Arc;
use stillwater::effect::Effect;
use stillwater::prelude::*;

/// Environment carrying the store that storage effects run against.
#[derive(Clone)]
pub struct StorageEnv {
    store: Arc<dyn KeyValueStore>,
}

impl StorageEnv {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Shared handle to the underlying store.
    pub fn shared_store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }
}

/// Load the persisted history under `key`.
pub fn load_history(
    key: impl Into<String>,
) -> impl Effect<Output = Option<History>, Error = StorageError, Env = StorageEnv> {
    let key = key.into();
    from_fn(move |env: &StorageEnv| read_history(env.store(), &key))
}

/// Persist `history` under `key`.
pub fn save_history(
    key: impl Into<String>,
    history: History,
) -> impl Effect<Output = (), Error = StorageError, Env = StorageEnv> {
    let key = key.into();
    from_fn(move |env: &StorageEnv| write_history(env.store(), &key, &history))
}

/// Load the persisted theme under `key`, ignoring unknown values.
pub fn load_theme(
    key: impl Into<String>,
) -> impl Effect<Output = Option<Theme>, Error = StorageError, Env = StorageEnv> {
    let key = key.into();
    from_fn(move |env: &StorageEnv| read_theme(env.store(), &key))
}

/// Persist `theme` under `key`.
pub fn save_theme(
    key: impl Into<String>,
    theme: Theme,
) -> impl Effect<Output = (), Error = StorageError, Env = StorageEnv> {
    let key = key.into();
    from_fn(move |env: &StorageEnv| write_theme(env.store(), &key, theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HistoryEntry, Operator};
    use crate::storage::MemoryStore;

    fn env_with(store: MemoryStore) -> StorageEnv {
        StorageEnv::new(Arc::new(store))
    }

    #[tokio::test]
    async fn save_then_load_history() {
        let env = env_with(MemoryStore::new());
        let history = History::new().record(HistoryEntry {
            operand1: "2".to_string(),
            operand2: "2".to_string(),
            operator: Operator::Multiply,
            result: "4".to_string(),
        });

        save_history("history", history.clone()).run(&env).await.unwrap();
        let loaded = load_history("history").run(&env).await.unwrap();

        assert_eq!(loaded, Some(history));
    }

    #[tokio::test]
    async fn effects_are_lazy() {
        let env = env_with(MemoryStore::new());
        let _pending = save_theme("theme", Theme::Dark);

        assert_eq!(env.store().get("theme").unwrap(), None);
    }

    #[tokio::test]
    async fn save_then_load_theme() {
        let env = env_with(MemoryStore::new());
        save_theme("theme", Theme::Dark).run(&env).await.unwrap();
        assert_eq!(load_theme("theme").run(&env).await.unwrap(), Some(Theme::Dark));
    }

    #[tokio::test]
    async fn corrupt_history_surfaces_as_error() {
        let env = env_with(MemoryStore::with_entries([("history", "nope")]));
        let result = load_history("history").run(&env).await;
        assert!(matches!(result, Err(StorageError::CorruptHistory { .. })));
    }
}
