//! Calcore: a pure calculator state machine with persisted history
//!
//! Calcore is built on Stillwater's "pure core, imperative shell" philosophy.
//! The calculator logic is composed of pure functions with no side effects,
//! while persistence is isolated in Effects run against an injected store.
//!
//! # Core Concepts
//!
//! - **State**: immutable `CalculatorState` with one transition per action
//! - **History**: bounded record of the last ten completed operations
//! - **Evaluation**: floating-point arithmetic over decimal strings
//! - **Session**: host that loads/persists history and theme
//!
//! # Example
//!
//! ```rust
//! use calcore::core::{Action, CalculatorState, Digit, Operator};
//!
//! let state = CalculatorState::new()
//!     .apply(&Action::AddDigit(Digit::new(5).unwrap()))
//!     .apply(&Action::AddDigit(Digit::new(0).unwrap()))
//!     .apply(&Action::AddOperator(Operator::Percent))
//!     .apply(&Action::AddDigit(Digit::new(1).unwrap()))
//!     .apply(&Action::AddDigit(Digit::new(0).unwrap()))
//!     .apply(&Action::Calculate);
//!
//! assert_eq!(state.operand1(), Some("5"));
//! assert_eq!(state.history().latest().unwrap().to_string(), "50 % 10 = 5");
//! ```

pub mod config;
pub mod core;
pub mod session;
pub mod storage;
pub mod theme;

// Re-export commonly used types
pub use crate::config::CalculatorConfig;
pub use crate::core::{Action, CalculatorState, Digit, History, HistoryEntry, Operator};
pub use crate::session::CalculatorSession;
pub use crate::storage::KeyValueStore;
pub use crate::theme::Theme;
