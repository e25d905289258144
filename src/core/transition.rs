//! State transitions, one pure method per action.
//!
//! Every method takes `&self` and returns the next state. No transition
//! can fail: input types are validated before they get here, and numeric
//! edge cases surface as non-finite result strings.

use super::action::Action;
use super::evaluate::evaluate;
use super::history::{History, HistoryEntry};
use super::operator::{Digit, Operator};
use super::state::CalculatorState;

impl CalculatorState {
    /// Apply any action. Equivalent to calling the matching method.
    pub fn apply(&self, action: &Action) -> Self {
        match action {
            Action::AddDigit(digit) => self.add_digit(*digit),
            Action::AddOperator(op) => self.add_operator(*op),
            Action::AddDecimal => self.add_decimal(),
            Action::Backspace => self.backspace(),
            Action::Calculate => self.calculate(),
            Action::AllClear => self.all_clear(),
            Action::LoadHistoryEntry(entry) => self.load_history_entry(entry),
            Action::ClearHistory => self.clear_history(),
            Action::SetHistory(history) => self.set_history(history.clone()),
        }
    }

    /// Append a digit to the active operand, replacing a lone "0".
    pub fn add_digit(&self, digit: Digit) -> Self {
        self.edit_active(|operand| match operand {
            None | Some("0") => Some(digit.to_string()),
            Some(current) => {
                let mut next = current.to_string();
                next.push(digit.as_char());
                Some(next)
            }
        })
    }

    /// Choose an operator, chaining a pending operation if both operands
    /// are present.
    pub fn add_operator(&self, op: Operator) -> Self {
        if !self.is_operand1 {
            return Self {
                operator: Some(op),
                is_operand1: true,
                ..self.clone()
            };
        }

        match (&self.operand1, &self.operand2, self.operator) {
            (Some(operand1), Some(operand2), Some(pending)) => {
                let entry = completed(operand1, operand2, pending);
                Self {
                    operand1: Some(entry.result.clone()),
                    operand2: None,
                    operator: Some(op),
                    is_operand1: true,
                    history: self.history.record(entry),
                }
            }
            _ => Self {
                operator: Some(op),
                ..self.clone()
            },
        }
    }

    /// Append "." to the active operand unless it already has one.
    pub fn add_decimal(&self) -> Self {
        self.edit_active(|operand| match operand {
            Some(current) if !current.contains('.') => Some(format!("{current}.")),
            other => other.map(str::to_string),
        })
    }

    /// Drop the last character of the active operand, bottoming out at "0".
    pub fn backspace(&self) -> Self {
        self.edit_active(|operand| match operand {
            Some(current) if current.chars().count() > 1 => {
                let mut next = current.to_string();
                next.pop();
                Some(next)
            }
            _ => Some("0".to_string()),
        })
    }

    /// Evaluate the pending operation.
    ///
    /// Without operand2, operand1 is used on both sides (`5 × =` gives 25).
    /// No-op when operand1 or the operator is absent.
    pub fn calculate(&self) -> Self {
        let (Some(operand1), Some(pending)) = (&self.operand1, self.operator) else {
            return self.clone();
        };
        let operand2 = self.operand2.as_deref().unwrap_or(operand1.as_str());
        let entry = completed(operand1, operand2, pending);

        Self {
            operand1: Some(entry.result.clone()),
            operand2: None,
            operator: None,
            is_operand1: false,
            history: self.history.record(entry),
        }
    }

    /// Reset input to the initial state, keeping history.
    pub fn all_clear(&self) -> Self {
        Self::with_history(self.history.clone())
    }

    /// Restore the operands and operator of a past calculation for editing.
    pub fn load_history_entry(&self, entry: &HistoryEntry) -> Self {
        Self {
            operand1: Some(entry.operand1.clone()),
            operand2: Some(entry.operand2.clone()),
            operator: Some(entry.operator),
            is_operand1: true,
            history: self.history.clone(),
        }
    }

    pub fn clear_history(&self) -> Self {
        Self {
            history: History::new(),
            ..self.clone()
        }
    }

    /// Replace the history wholesale, keeping at most the newest entries.
    pub fn set_history(&self, history: History) -> Self {
        Self {
            history: History::from_entries(history.entries().to_vec()),
            ..self.clone()
        }
    }

    fn edit_active<F>(&self, edit: F) -> Self
    where
        F: FnOnce(Option<&str>) -> Option<String>,
    {
        let mut next = self.clone();
        if self.is_operand1 {
            next.operand2 = edit(self.operand2.as_deref());
        } else {
            next.operand1 = edit(self.operand1.as_deref());
        }
        next
    }
}

fn completed(operand1: &str, operand2: &str, operator: Operator) -> HistoryEntry {
    HistoryEntry {
        operand1: operand1.to_string(),
        operand2: operand2.to_string(),
        operator,
        result: evaluate(operand1, operand2, operator),
    }
}
