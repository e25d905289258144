//! Configuration error types.

use thiserror::Error;

/// A single reason a configuration is unusable.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Storage key for {field} must not be empty")]
    EmptyKey { field: &'static str },

    #[error("History and theme share the storage key '{key}'")]
    SharedKey { key: String },
}

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration text was not valid JSON for this schema
    #[error("Configuration parse failed: {0}")]
    ParseFailed(String),

    /// Every violation found, not just the first
    #[error("Invalid configuration: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
