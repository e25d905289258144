//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Typed input (`Digit`, `Operator`) and the closed `Action` set
//! - The immutable `CalculatorState` with one transition per action
//! - Bounded, immutable `History` of completed operations
//! - Floating-point evaluation over decimal strings
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod action;
mod evaluate;
mod history;
mod operator;
mod state;
mod transition;

pub use action::Action;
pub use evaluate::{evaluate, format_number, parse_operand};
pub use history::{History, HistoryEntry, HISTORY_LIMIT};
pub use operator::{Digit, InputError, Operator};
pub use state::{CalculatorState, Phase, Screens};
