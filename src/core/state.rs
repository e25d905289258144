//! Calculator state value and the views derived from it.
//!
//! `CalculatorState` is an immutable value: every action produces a new
//! state (see the transition methods), and the pure accessors here never
//! change it.

use super::history::History;
use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where input currently lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Digits extend operand1.
    EnteringFirst,
    /// Operator chosen, operand2 not started.
    AwaitingSecond,
    /// Digits extend operand2.
    EnteringSecond,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EnteringFirst => "EnteringFirst",
            Self::AwaitingSecond => "AwaitingSecond",
            Self::EnteringSecond => "EnteringSecond",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two display lines a calculator screen shows.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Screens {
    /// `operand1` followed by the pending operator, or empty.
    pub expression: String,
    /// The operand being edited.
    pub main: String,
}

/// Full calculator state.
///
/// # Example
///
/// ```rust
/// use calcore::core::{CalculatorState, Digit, Operator};
///
/// let state = CalculatorState::new()
///     .add_digit(Digit::new(6).unwrap())
///     .add_operator(Operator::Divide)
///     .add_digit(Digit::new(3).unwrap())
///     .calculate();
///
/// assert_eq!(state.operand1(), Some("2"));
/// assert_eq!(state.history().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) operand1: Option<String>,
    pub(crate) operand2: Option<String>,
    pub(crate) operator: Option<Operator>,
    pub(crate) is_operand1: bool,
    pub(crate) history: History,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Initial state: operand1 is "0", nothing pending, empty history.
    pub fn new() -> Self {
        Self::with_history(History::new())
    }

    /// Initial state carrying an existing history.
    pub fn with_history(history: History) -> Self {
        Self {
            operand1: Some("0".to_string()),
            operand2: None,
            operator: None,
            is_operand1: false,
            history,
        }
    }

    /// First operand, or the running result after a calculation.
    pub fn operand1(&self) -> Option<&str> {
        self.operand1.as_deref()
    }

    /// Second operand, present only once input targets it.
    pub fn operand2(&self) -> Option<&str> {
        self.operand2.as_deref()
    }

    /// Pending operator, if one was chosen.
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// True once an operator was chosen and digits target operand2.
    pub fn is_operand1(&self) -> bool {
        self.is_operand1
    }

    /// Completed operations, most recent first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The operand that input currently edits.
    pub fn active_operand(&self) -> Option<&str> {
        if self.is_operand1 {
            self.operand2()
        } else {
            self.operand1()
        }
    }

    /// Current input phase, derived from focus and operand2.
    pub fn phase(&self) -> Phase {
        match (self.is_operand1, &self.operand2) {
            (false, _) => Phase::EnteringFirst,
            (true, None) => Phase::AwaitingSecond,
            (true, Some(_)) => Phase::EnteringSecond,
        }
    }

    /// Display lines for the current state.
    pub fn screens(&self) -> Screens {
        let expression = match (&self.operand1, self.operator) {
            (Some(operand1), Some(operator)) if self.is_operand1 => {
                format!("{operand1}{operator}")
            }
            _ => String::new(),
        };
        let main = self
            .operand2
            .as_deref()
            .or(self.operand1.as_deref())
            .unwrap_or_default()
            .to_string();

        Screens { expression, main }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::HISTORY_LIMIT;

    #[test]
    fn initial_state() {
        let state = CalculatorState::new();
        assert_eq!(state.operand1(), Some("0"));
        assert_eq!(state.operand2(), None);
        assert_eq!(state.operator(), None);
        assert!(!state.is_operand1());
        assert!(state.history().is_empty());
        assert_eq!(state.phase(), Phase::EnteringFirst);
    }

    #[test]
    fn phase_follows_focus_and_operand2() {
        let mut state = CalculatorState::new();
        state.is_operand1 = true;
        state.operator = Some(Operator::Add);
        assert_eq!(state.phase(), Phase::AwaitingSecond);

        state.operand2 = Some("4".to_string());
        assert_eq!(state.phase(), Phase::EnteringSecond);
        assert_eq!(state.active_operand(), Some("4"));
    }

    #[test]
    fn screens_show_pending_expression() {
        let mut state = CalculatorState::new();
        state.operand1 = Some("12".to_string());
        assert_eq!(
            state.screens(),
            Screens {
                expression: String::new(),
                main: "12".to_string()
            }
        );

        state.operator = Some(Operator::Multiply);
        state.is_operand1 = true;
        assert_eq!(state.screens().expression, "12×");
        assert_eq!(state.screens().main, "12");

        state.operand2 = Some("3".to_string());
        assert_eq!(state.screens().main, "3");
    }

    #[test]
    fn phase_names() {
        assert_eq!(Phase::EnteringFirst.name(), "EnteringFirst");
        assert_eq!(Phase::AwaitingSecond.to_string(), "AwaitingSecond");
    }

    #[test]
    fn deserialized_state_history_is_capped() {
        let entries: Vec<_> = (0..12)
            .map(|n| {
                serde_json::json!({
                    "operand1": n.to_string(),
                    "operand2": "1",
                    "operator": "+",
                    "result": (n + 1).to_string(),
                })
            })
            .collect();
        let json = serde_json::json!({
            "operand1": "0",
            "operand2": null,
            "operator": null,
            "is_operand1": false,
            "history": entries,
        });

        let state: CalculatorState = serde_json::from_value(json).unwrap();
        assert_eq!(state.history().len(), HISTORY_LIMIT);
        assert_eq!(state.history().latest().unwrap().operand1, "0");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = CalculatorState::new();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
