//! Binary operators and validated digit input.
//!
//! Both types reject malformed input at construction, so the state machine
//! only ever appends characters it knows are valid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when converting raw key input into calculator input.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("Digit out of range: {0} (expected 0-9)")]
    DigitOutOfRange(u8),

    #[error("Unknown operator symbol '{0}'")]
    UnknownOperator(String),
}

/// One of the fixed set of binary operators.
///
/// Serialized as its display symbol, which is also the format used in
/// persisted history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
    /// Percent-of: `(a * b) / 100`, not modulo.
    #[serde(rename = "%")]
    Percent,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Percent,
    ];

    /// Display symbol for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Percent => "%",
        }
    }

    /// Apply the operator to two parsed operands.
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Percent => (a * b) / 100.0,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "×" | "*" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            "%" => Ok(Self::Percent),
            other => Err(InputError::UnknownOperator(other.to_string())),
        }
    }
}

/// A single decimal digit, 0 through 9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, rejecting values above 9.
    pub fn new(value: u8) -> Result<Self, InputError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(InputError::DigitOutOfRange(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// The digit as its ASCII character.
    pub fn as_char(&self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
