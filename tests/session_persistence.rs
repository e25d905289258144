//! Session persistence across restarts.
//!
//! Each test opens a session, works with it, drops it, and opens a fresh
//! session on the same store to check what survived.

use calcore::config::CalculatorConfig;
use calcore::core::{Action, Digit, Operator, HISTORY_LIMIT};
use calcore::session::CalculatorSession;
use calcore::storage::{FileStore, KeyValueStore, MemoryStore};
use calcore::Theme;
use std::sync::Arc;
use tempfile::TempDir;

fn digit(value: u8) -> Action {
    Action::AddDigit(Digit::new(value).unwrap())
}

async fn open(store: Arc<dyn KeyValueStore>) -> CalculatorSession {
    CalculatorSession::open(store, CalculatorConfig::default())
        .await
        .unwrap()
}

#[tokio::test]
async fn history_and_theme_survive_restart() {
    let dir = TempDir::new().unwrap();
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path().join("calc.json")));

    {
        let mut session = open(Arc::clone(&store)).await;
        session.dispatch(digit(6));
        session.dispatch(Action::AddOperator(Operator::Divide));
        session.dispatch(digit(3));
        session.dispatch(Action::Calculate);
        session.toggle_theme();
        session.flush().await;
    }

    let session = open(Arc::new(FileStore::new(dir.path().join("calc.json")))).await;
    assert_eq!(session.theme(), Theme::Dark);
    assert_eq!(session.state().history().len(), 1);
    assert_eq!(
        session.state().history().latest().unwrap().to_string(),
        "6 ÷ 3 = 2"
    );
    // Input is not persisted, only history.
    assert_eq!(session.state().operand1(), Some("0"));
}

#[tokio::test]
async fn reloaded_history_entry_can_be_recalculated() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

    {
        let mut session = open(Arc::clone(&store)).await;
        session.dispatch(digit(5));
        session.dispatch(digit(0));
        session.dispatch(Action::AddOperator(Operator::Percent));
        session.dispatch(digit(1));
        session.dispatch(digit(0));
        session.dispatch(Action::Calculate);
        session.flush().await;
    }

    let mut session = open(store).await;
    let entry = session.state().history().latest().unwrap().clone();
    session.dispatch(Action::LoadHistoryEntry(entry.clone()));
    let state = session.dispatch(Action::Calculate);

    assert_eq!(state.operand1(), Some(entry.result.as_str()));
    assert_eq!(state.history().len(), 2);
}

#[tokio::test]
async fn last_write_wins_after_rapid_changes() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let mut session = open(Arc::clone(&store)).await;

    for _ in 0..HISTORY_LIMIT + 5 {
        session.dispatch(digit(1));
        session.dispatch(Action::AddOperator(Operator::Add));
        session.dispatch(Action::Calculate);
    }
    for _ in 0..5 {
        session.toggle_theme();
    }
    session.flush().await;

    let reopened = open(store).await;
    assert_eq!(reopened.state().history(), session.state().history());
    assert_eq!(reopened.state().history().len(), HISTORY_LIMIT);
    assert_eq!(reopened.theme(), Theme::Dark);
}

#[tokio::test]
async fn all_clear_does_not_rewrite_history() {
    let store = Arc::new(MemoryStore::new());
    let mut session = open(store.clone()).await;

    session.dispatch(digit(8));
    session.dispatch(Action::AllClear);
    session.flush().await;

    assert_eq!(store.get("history").unwrap(), None);
}
