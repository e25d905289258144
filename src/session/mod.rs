//! Calculator session: the imperative shell around the pure core.
//!
//! A session owns one [`CalculatorState`] and the current [`Theme`]. It
//! reads both from storage once when opened, applies actions
//! synchronously, and hands every history or theme change to a background
//! writer without waiting for it.
//!
//! # Example
//!
//! ```rust
//! use calcore::config::CalculatorConfig;
//! use calcore::core::{Action, Digit, Operator};
//! use calcore::session::CalculatorSession;
//! use calcore::storage::{KeyValueStore, MemoryStore};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = Arc::new(MemoryStore::new());
//! let mut session = CalculatorSession::open(store.clone(), CalculatorConfig::default())
//!     .await
//!     .unwrap();
//!
//! session.dispatch(Action::AddDigit(Digit::new(6).unwrap()));
//! session.dispatch(Action::AddOperator(Operator::Divide));
//! session.dispatch(Action::AddDigit(Digit::new(3).unwrap()));
//! let state = session.dispatch(Action::Calculate);
//! assert_eq!(state.operand1(), Some("2"));
//!
//! session.flush().await;
//! assert!(store.get("history").unwrap().is_some());
//! # }
//! ```

pub mod error;
mod writer;

pub use error::SessionError;

use crate::config::{CalculatorConfig, CorruptHistoryPolicy};
use crate::core::{Action, CalculatorState};
use crate::storage::{load_history, load_theme, KeyValueStore, StorageEnv, StorageError};
use crate::theme::Theme;
use std::sync::Arc;
use stillwater::effect::Effect;
use tracing::{debug, info, warn};
use writer::PersistHandle;

/// A running calculator bound to a store.
///
/// Must be opened inside a tokio runtime; the background writer lives on
/// it until the session is dropped.
pub struct CalculatorSession {
    state: CalculatorState,
    theme: Theme,
    config: CalculatorConfig,
    writer: PersistHandle,
}

impl CalculatorSession {
    /// Validate `config`, load the persisted theme and history, and start
    /// the background writer.
    pub async fn open(
        store: Arc<dyn KeyValueStore>,
        config: CalculatorConfig,
    ) -> Result<Self, SessionError> {
        let config = config.validated()?;
        let env = StorageEnv::new(store);

        let theme = load_theme(config.theme_key.clone())
            .run(&env)
            .await?
            .unwrap_or(config.default_theme);

        let history = match load_history(config.history_key.clone()).run(&env).await {
            Ok(history) => history,
            Err(e @ StorageError::CorruptHistory { .. }) => match config.corrupt_history {
                CorruptHistoryPolicy::Discard => {
                    warn!(error = %e, "Discarding corrupt stored history");
                    None
                }
                CorruptHistoryPolicy::Fail => return Err(e.into()),
            },
            Err(e) => return Err(e.into()),
        };

        let state = match history {
            Some(history) => CalculatorState::new().apply(&Action::SetHistory(history)),
            None => CalculatorState::new(),
        };

        info!(
            %theme,
            history_entries = state.history().len(),
            "Calculator session opened"
        );

        let writer = PersistHandle::spawn(
            env.shared_store(),
            config.history_key.clone(),
            config.theme_key.clone(),
        );

        Ok(Self {
            state,
            theme,
            config,
            writer,
        })
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Apply an action and return the new state.
    ///
    /// If the history changed, a write is queued; this never waits for it.
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let next = self.state.apply(&action);
        debug!(
            action = action.name(),
            from = %self.state.phase(),
            to = %next.phase(),
            "Applied action"
        );

        if next.history() != self.state.history() {
            self.writer.history(next.history().clone());
        }
        self.state = next;
        &self.state
    }

    /// Switch to `theme` and queue a write.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.writer.theme(theme);
    }

    /// Flip between light and dark, returning the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggle());
        self.theme
    }

    /// Wait until all queued writes have reached the store.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }
}
