//! Bounded history of completed operations.
//!
//! Provides immutable tracking of calculations, most recent first,
//! following functional programming principles.

use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of entries a history retains.
pub const HISTORY_LIMIT: usize = 10;

/// Record of a single completed operation.
///
/// Entries are immutable values. `operand2` always holds the value that was
/// actually used, so re-applying `operator` to the operands reproduces
/// `result`.
///
/// # Example
///
/// ```rust
/// use calcore::core::{HistoryEntry, Operator};
///
/// let entry = HistoryEntry {
///     operand1: "6".to_string(),
///     operand2: "3".to_string(),
///     operator: Operator::Divide,
///     result: "2".to_string(),
/// };
/// assert_eq!(entry.to_string(), "6 ÷ 3 = 2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub operand1: String,
    pub operand2: String,
    pub operator: Operator,
    pub result: String,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.operand1, self.operator, self.operand2, self.result
        )
    }
}

/// Ordered history of completed operations, most recent first.
///
/// History is immutable - `record` returns a new history with the entry
/// added at the front and the oldest entries evicted beyond
/// [`HISTORY_LIMIT`]. Serializes as a bare JSON array of entries; arrays
/// longer than the limit keep only their first entries when deserialized.
///
/// # Example
///
/// ```rust
/// use calcore::core::{History, HistoryEntry, Operator};
///
/// let history = History::new();
/// let entry = HistoryEntry {
///     operand1: "1".to_string(),
///     operand2: "2".to_string(),
///     operator: Operator::Add,
///     result: "3".to_string(),
/// };
///
/// let updated = history.record(entry);
/// assert_eq!(updated.len(), 1);
/// assert!(history.is_empty()); // Original unchanged
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<HistoryEntry>", into = "Vec<HistoryEntry>")]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a history from entries ordered most recent first.
    ///
    /// Entries past [`HISTORY_LIMIT`] are dropped.
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_LIMIT);
        Self { entries }
    }

    /// Record an entry, returning a new history.
    ///
    /// This is a pure function - the existing history is left as is.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(HISTORY_LIMIT);
        entries.push(entry);
        entries.extend(self.entries.iter().take(HISTORY_LIMIT - 1).cloned());
        Self { entries }
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Most recent entry, if any.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Number of entries, never more than [`HISTORY_LIMIT`].
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no operation has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries, most recent first.
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }
}

impl From<Vec<HistoryEntry>> for History {
    fn from(entries: Vec<HistoryEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<History> for Vec<HistoryEntry> {
    fn from(history: History) -> Self {
        history.entries
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
