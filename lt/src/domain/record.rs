//! Per-month progress records

use std::collections::BTreeMap;
use tracing::warn;

use progressstore::MonthEntries;

use super::{CompletionStatus, MonthKey, Problem};

/// Stable key -> status for one month
///
/// Sparse: only completed problems have an entry. A missing entry means
/// [`CompletionStatus::NotCompleted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    month: MonthKey,
    entries: BTreeMap<String, CompletionStatus>,
}

impl ProgressRecord {
    /// An empty record, as on a first visit to a month
    pub fn new(month: MonthKey) -> Self {
        Self {
            month,
            entries: BTreeMap::new(),
        }
    }

    pub fn month(&self) -> MonthKey {
        self.month
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &BTreeMap<String, CompletionStatus> {
        &self.entries
    }

    pub fn status_of(&self, stable_key: &str) -> CompletionStatus {
        self.entries.get(stable_key).copied().unwrap_or_default()
    }

    /// Set a status unconditionally; `NotCompleted` removes the entry
    pub fn set(&mut self, stable_key: &str, status: CompletionStatus) {
        if status.is_completed() {
            self.entries.insert(stable_key.to_string(), status);
        } else {
            self.entries.remove(stable_key);
        }
    }

    /// Toggle a status: choosing the current status again clears it
    ///
    /// Returns the status in effect afterwards.
    pub fn toggle(&mut self, stable_key: &str, status: CompletionStatus) -> CompletionStatus {
        let next = if self.status_of(stable_key) == status {
            CompletionStatus::NotCompleted
        } else {
            status
        };
        self.set(stable_key, next);
        next
    }

    /// Pair each problem of an ordered ladder with its status
    pub fn pair_with<'a>(&self, ladder: &'a [Problem]) -> Vec<(&'a Problem, CompletionStatus)> {
        ladder.iter().map(|p| (p, self.status_of(&p.stable_key))).collect()
    }

    /// Convert to the string form held by the persistence store
    pub fn to_entries(&self) -> MonthEntries {
        self.entries
            .iter()
            .map(|(key, status)| (key.clone(), status.to_string()))
            .collect()
    }

    /// Build from the string form held by the persistence store
    ///
    /// Unrecognised status strings are logged and dropped.
    pub fn from_entries(month: MonthKey, entries: &MonthEntries) -> Self {
        let mut record = Self::new(month);
        for (key, raw) in entries {
            match raw.parse::<CompletionStatus>() {
                Ok(status) => record.set(key, status),
                Err(e) => warn!(%month, key = %key, error = %e, "Dropping unreadable stored status"),
            }
        }
        record
    }
}
