//! Calculator configuration.
//!
//! Settings are plain serde data with defaults for every field, so a
//! partial JSON document (or none at all) yields a usable configuration.
//! Validation uses Stillwater's `Validation` to report ALL problems in a
//! single pass instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use calcore::config::{CalculatorConfig, CorruptHistoryPolicy};
//! use calcore::Theme;
//!
//! let config = CalculatorConfig::default()
//!     .default_theme(Theme::Dark)
//!     .on_corrupt_history(CorruptHistoryPolicy::Fail);
//!
//! assert!(config.validate().is_success());
//! ```

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Storage key for the persisted history, unless configured otherwise.
pub const DEFAULT_HISTORY_KEY: &str = "history";

/// Storage key for the persisted theme, unless configured otherwise.
pub const DEFAULT_THEME_KEY: &str = "theme";

/// What to do when the stored history cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorruptHistoryPolicy {
    /// Log a warning and start with an empty history
    #[default]
    Discard,

    /// Refuse to open the session
    Fail,
}

/// Settings for a calculator session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub history_key: String,
    pub theme_key: String,
    /// Theme used when nothing valid is stored
    pub default_theme: Theme,
    pub corrupt_history: CorruptHistoryPolicy,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            default_theme: Theme::default(),
            corrupt_history: CorruptHistoryPolicy::default(),
        }
    }
}

impl CalculatorConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    pub fn history_key(mut self, key: impl Into<String>) -> Self {
        self.history_key = key.into();
        self
    }

    pub fn theme_key(mut self, key: impl Into<String>) -> Self {
        self.theme_key = key.into();
        self
    }

    pub fn default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self
    }

    pub fn on_corrupt_history(mut self, policy: CorruptHistoryPolicy) -> Self {
        self.corrupt_history = policy;
        self
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks = vec![
            non_empty("history_key", &self.history_key),
            non_empty("theme_key", &self.theme_key),
            if !self.history_key.is_empty() && self.history_key == self.theme_key {
                Validation::fail(ConfigViolation::SharedKey {
                    key: self.history_key.clone(),
                })
            } else {
                Validation::success(())
            },
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// `validate` as a `Result`, for callers that use `?`.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

fn non_empty(field: &'static str, key: &str) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if key.trim().is_empty() {
        Validation::fail(ConfigViolation::EmptyKey { field })
    } else {
        Validation::success(())
    }
}
