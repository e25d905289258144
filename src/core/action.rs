//! The closed set of calculator actions.

use super::history::{History, HistoryEntry};
use super::operator::{Digit, Operator};
use serde::{Deserialize, Serialize};

/// An input dispatched to the calculator.
///
/// Serialized adjacently tagged so hosts can forward actions as
/// `{"type": "add_digit", "payload": 7}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    AddDigit(Digit),
    AddOperator(Operator),
    AddDecimal,
    Backspace,
    Calculate,
    AllClear,
    LoadHistoryEntry(HistoryEntry),
    ClearHistory,
    /// Replace the whole history, e.g. with the persisted one at startup.
    SetHistory(History),
}

impl Action {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddDigit(_) => "AddDigit",
            Self::AddOperator(_) => "AddOperator",
            Self::AddDecimal => "AddDecimal",
            Self::Backspace => "Backspace",
            Self::Calculate => "Calculate",
            Self::AllClear => "AllClear",
            Self::LoadHistoryEntry(_) => "LoadHistoryEntry",
            Self::ClearHistory => "ClearHistory",
            Self::SetHistory(_) => "SetHistory",
        }
    }
}
