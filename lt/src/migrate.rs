//! Import of the legacy two-state progress format
//!
//! The old tracker saved a single flat JSON object keyed by problem id, with
//! no month and no attempt tier:
//!
//! ```json
//! { "1": "completed", "2": "in-progress", "3": "not-started" }
//! ```
//!
//! Migration maps those ids onto one month's ladder and turns `completed` into
//! a configurable attempt tier. Everything else carries no completion and is
//! dropped.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::domain::{CompletionStatus, MonthKey, Problem, ProgressRecord};

/// States used by the legacy format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegacyStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl std::str::FromStr for LegacyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-started" => Ok(Self::NotStarted),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("Unknown legacy status: {}", s)),
        }
    }
}

/// Outcome of a migration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub record: ProgressRecord,
    /// Legacy entries that became a completion
    pub migrated: usize,
    /// Legacy ids with no problem in the ladder
    pub unknown_ids: Vec<String>,
    /// Legacy values that were not one of the three known states
    pub unreadable: Vec<(String, String)>,
}

/// Adapter from the legacy format to a [`ProgressRecord`]
#[derive(Debug, Clone, Copy)]
pub struct LegacyMigration {
    completed_as: CompletionStatus,
}

impl LegacyMigration {
    /// `completed_as` is the tier given to legacy `completed` entries; it must
    /// be a completed tier
    pub fn new(completed_as: CompletionStatus) -> Result<Self, String> {
        if !completed_as.is_completed() {
            return Err("Legacy completions must map to an attempt tier".to_string());
        }
        Ok(Self { completed_as })
    }

    /// Parse the legacy JSON object
    pub fn parse(content: &str) -> serde_json::Result<BTreeMap<String, String>> {
        serde_json::from_str(content)
    }

    /// Convert legacy entries for `month` using that month's ladder
    pub fn migrate(&self, month: MonthKey, ladder: &[Problem], legacy: &BTreeMap<String, String>) -> MigrationReport {
        let mut report = MigrationReport {
            record: ProgressRecord::new(month),
            migrated: 0,
            unknown_ids: Vec::new(),
            unreadable: Vec::new(),
        };

        for (raw_id, raw_status) in legacy {
            let status = match raw_status.parse::<LegacyStatus>() {
                Ok(status) => status,
                Err(_) => {
                    report.unreadable.push((raw_id.clone(), raw_status.clone()));
                    continue;
                }
            };

            let problem = raw_id
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(|id| ladder.iter().find(|p| p.id == id));
            let Some(problem) = problem else {
                report.unknown_ids.push(raw_id.clone());
                continue;
            };

            if status == LegacyStatus::Completed {
                report.record.set(&problem.stable_key, self.completed_as);
                report.migrated += 1;
            }
        }

        if !report.unknown_ids.is_empty() || !report.unreadable.is_empty() {
            warn!(
                %month,
                unknown_ids = report.unknown_ids.len(),
                unreadable = report.unreadable.len(),
                "Legacy migration skipped entries"
            );
        }
        info!(%month, migrated = report.migrated, "Legacy migration complete");
        report
    }
}

impl Default for LegacyMigration {
    fn default() -> Self {
        Self {
            completed_as: CompletionStatus::FourthOrMorePlus,
        }
    }
}
