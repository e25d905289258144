//! Keypad
//!
//! Drives a calculator session from keypad tokens read on stdin and prints
//! both display lines after every key.
//!
//! Tokens: `0`-`9`, `.`, `+ - * / %`, `=`, `C` (backspace), `AC`,
//! `H` (show history), `L<n>` (load history entry n), `CH` (clear history),
//! `T` (toggle theme).
//!
//! History and theme are stored in `calc.json` in the current directory,
//! or in the file named by `CALC_STORE`.
//!
//! Run with: echo "1 2 + 3 0 =" | cargo run --example keypad
//! Set `RUST_LOG=calcore=debug` to watch transitions.

use calcore::config::CalculatorConfig;
use calcore::core::{Action, Digit, Operator};
use calcore::session::CalculatorSession;
use calcore::storage::FileStore;
use std::io::{self, BufRead};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn parse_token(token: &str, session: &CalculatorSession) -> Option<Action> {
    match token {
        "." => Some(Action::AddDecimal),
        "=" => Some(Action::Calculate),
        "C" => Some(Action::Backspace),
        "AC" => Some(Action::AllClear),
        "CH" => Some(Action::ClearHistory),
        _ => {
            if let Some(index) = token.strip_prefix('L') {
                let index: usize = index.parse().ok()?;
                let entry = session.state().history().entries().get(index)?;
                return Some(Action::LoadHistoryEntry(entry.clone()));
            }
            if let Ok(value) = token.parse::<u8>() {
                return Digit::new(value).ok().map(Action::AddDigit);
            }
            token.parse::<Operator>().ok().map(Action::AddOperator)
        }
    }
}

fn print_history(session: &CalculatorSession) {
    let history = session.state().history();
    if history.is_empty() {
        println!("  No items in history!");
        return;
    }
    for (index, entry) in history.iter().enumerate() {
        println!("  [{index}] {entry}");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::var("CALC_STORE").unwrap_or_else(|_| "calc.json".to_string());
    let store = Arc::new(FileStore::new(path));

    let mut session = match CalculatorSession::open(store, CalculatorConfig::default()).await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to open calculator: {e}");
            std::process::exit(1);
        }
    };

    println!("=== Keypad ({} theme) ===", session.theme());

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        for token in line.split_whitespace() {
            match token {
                "H" => print_history(&session),
                "T" => println!("  theme: {}", session.toggle_theme()),
                _ => match parse_token(token, &session) {
                    Some(action) => {
                        let screens = session.dispatch(action).screens();
                        println!("{token:>3} | {:>20} | {:>20}", screens.expression, screens.main);
                    }
                    None => eprintln!("  unknown key '{token}'"),
                },
            }
        }
    }

    session.flush().await;
}
