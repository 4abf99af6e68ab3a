//! Tracker - ties the catalog, the codec and the progress store together
//!
//! Every mutation is written through to the store immediately. The codec never
//! touches the store; the tracker reads a record, runs the codec, and writes
//! the result back.

use eyre::{Context, Result, eyre};
use tracing::{debug, info};

use progressstore::ProgressStore;

use crate::catalog::CatalogResolver;
use crate::codec::{DecodedProgress, ProgressCodec, ShareCode};
use crate::domain::{CompletionStatus, MonthKey, Problem, ProgressRecord};
use crate::migrate::{LegacyMigration, MigrationReport};
use crate::scoring::{self, ScoreSummary};

/// Application service over one store and one catalog
pub struct Tracker<R> {
    store: ProgressStore,
    codec: ProgressCodec<R>,
}

impl<R: CatalogResolver> Tracker<R> {
    pub fn new(store: ProgressStore, codec: ProgressCodec<R>) -> Self {
        Self { store, codec }
    }

    /// The month's ladder, ascending id; empty for an unknown month
    pub fn ladder(&self, month: MonthKey) -> Vec<Problem> {
        self.codec.resolver().problems_for_month(month)
    }

    /// Saved progress for a month, empty on first visit
    pub fn record(&self, month: MonthKey) -> Result<ProgressRecord> {
        let entries = self
            .store
            .load(&month.to_string())
            .context(format!("Failed to load progress for {}", month))?;
        Ok(ProgressRecord::from_entries(month, &entries))
    }

    fn save(&self, record: &ProgressRecord) -> Result<()> {
        self.store
            .save(&record.month().to_string(), &record.to_entries())
            .context(format!("Failed to save progress for {}", record.month()))
    }

    /// Toggle a problem's status and persist; returns the status now in effect
    pub fn toggle(&self, month: MonthKey, problem_id: u32, status: CompletionStatus) -> Result<CompletionStatus> {
        let ladder = self.ladder(month);
        let problem = ladder
            .iter()
            .find(|p| p.id == problem_id)
            .ok_or_else(|| eyre!("Problem {} is not on the {} ladder", problem_id, month))?;

        let mut record = self.record(month)?;
        let now = record.toggle(&problem.stable_key, status);
        self.save(&record)?;

        debug!(%month, problem_id, %now, "Toggled problem status");
        Ok(now)
    }

    pub fn score(&self, month: MonthKey) -> Result<ScoreSummary> {
        let record = self.record(month)?;
        Ok(scoring::score(&self.ladder(month), &record))
    }

    /// Share code for a month's saved progress
    ///
    /// Fails unless the month's ladder fills the codec's layout, so every code
    /// handed out can be imported again.
    pub fn share(&self, month: MonthKey) -> Result<ShareCode> {
        let ladder = self.ladder(month);
        if ladder.is_empty() {
            return Err(eyre!("No ladder is defined for {}", month));
        }
        let expected = self.codec.layout().problem_count();
        if ladder.len() != expected {
            return Err(eyre!(
                "The {} ladder has {} problems but share codes are sized for {}",
                month,
                ladder.len(),
                expected
            ));
        }
        let record = self.record(month)?;
        Ok(self.codec.encode_record(&record))
    }

    /// Decode a share code and replace that month's saved progress with it
    ///
    /// Decode failures keep their [`crate::codec::DecodeError`]; recover it with `downcast_ref`.
    pub fn import(&self, code: &str) -> Result<DecodedProgress> {
        let decoded = self.codec.decode(code)?;
        self.save(&decoded.record)?;
        info!(month = %decoded.month, completed = decoded.record.len(), "Imported share code");
        Ok(decoded)
    }

    /// Apply a legacy two-state progress map on top of a month's saved progress
    pub fn migrate_legacy(
        &self,
        month: MonthKey,
        legacy: &std::collections::BTreeMap<String, String>,
        migration: &LegacyMigration,
    ) -> Result<MigrationReport> {
        let ladder = self.ladder(month);
        if ladder.is_empty() {
            return Err(eyre!("No ladder is defined for {}", month));
        }

        let report = migration.migrate(month, &ladder, legacy);
        let mut record = self.record(month)?;
        for (key, status) in report.record.entries() {
            record.set(key, *status);
        }
        self.save(&record)?;
        Ok(report)
    }

    /// Drop a month's saved progress
    pub fn reset(&self, month: MonthKey) -> Result<bool> {
        self.store
            .remove(&month.to_string())
            .context(format!("Failed to reset progress for {}", month))
    }

    /// Months with saved progress, ascending; unparseable keys are skipped
    pub fn months(&self) -> Result<Vec<MonthKey>> {
        let keys = self.store.months().context("Failed to list stored months")?;
        Ok(keys.iter().filter_map(|k| k.parse().ok()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::codec::DecodeError;
    use crate::domain::CompletionStatus::*;
    use crate::testing::{catalog_with, ladder, month};
    use tempfile::TempDir;

    fn tracker(temp: &TempDir) -> Tracker<StaticCatalog> {
        let store = ProgressStore::open(temp.path().join("progress.json")).unwrap();
        Tracker::new(store, ProgressCodec::new(catalog_with("2026-02", ladder("feb", 21))))
    }

    #[test]
    fn test_toggle_persists() {
        let temp = TempDir::new().unwrap();
        let tracker = tracker(&temp);
        let feb = month("2026-02");

        assert_eq!(tracker.toggle(feb, 1, FirstAttempt).unwrap(), FirstAttempt);
        assert_eq!(tracker.record(feb).unwrap().status_of("feb-1"), FirstAttempt);

        assert_eq!(tracker.toggle(feb, 1, FirstAttempt).unwrap(), NotCompleted);
        assert!(tracker.record(feb).unwrap().is_empty());
    }

    #[test]
    fn test_toggle_unknown_problem_fails() {
        let temp = TempDir::new().unwrap();
        let tracker = tracker(&temp);
        assert!(tracker.toggle(month("2026-02"), 22, FirstAttempt).is_err());
        assert!(tracker.toggle(month("2026-03"), 1, FirstAttempt).is_err());
    }

    #[test]
    fn test_share_and_import_round_trip() {
        let source_dir = TempDir::new().unwrap();
        let source = tracker(&source_dir);
        let feb = month("2026-02");
        source.toggle(feb, 1, FirstAttempt).unwrap();
        source.toggle(feb, 21, SecondAttempt).unwrap();

        let code = source.share(feb).unwrap();
        assert_eq!(code.as_str().len(), 18);

        let target_dir = TempDir::new().unwrap();
        let target = tracker(&target_dir);
        target.toggle(feb, 5, ThirdAttempt).unwrap();

        let decoded = target.import(code.as_str()).unwrap();
        assert_eq!(decoded.month, feb);
        assert_eq!(target.record(feb).unwrap(), source.record(feb).unwrap());
        assert_eq!(target.score(feb).unwrap().total, 10);
    }

    #[test]
    fn test_import_bad_code_surfaces_decode_error() {
        let temp = TempDir::new().unwrap();
        let err = tracker(&temp).import("short").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DecodeError>(),
            Some(DecodeError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_share_refuses_ladder_that_does_not_fill_layout() {
        let temp = TempDir::new().unwrap();
        let store = ProgressStore::open(temp.path().join("progress.json")).unwrap();
        let tracker = Tracker::new(store, ProgressCodec::new(catalog_with("2026-04", ladder("apr", 20))));
        let apr = month("2026-04");
        tracker.toggle(apr, 1, FirstAttempt).unwrap();

        let err = tracker.share(apr).unwrap_err();
        assert!(err.to_string().contains("20 problems"));
    }

    #[test]
    fn test_share_and_import_with_custom_ladder_size() {
        let temp = TempDir::new().unwrap();
        let store = ProgressStore::open(temp.path().join("progress.json")).unwrap();
        let codec = ProgressCodec::with_problem_count(catalog_with("2026-04", ladder("apr", 20)), 20);
        let tracker = Tracker::new(store, codec);
        let apr = month("2026-04");
        tracker.toggle(apr, 1, FirstAttempt).unwrap();
        tracker.toggle(apr, 20, ThirdAttempt).unwrap();

        let code = tracker.share(apr).unwrap();
        assert_eq!(code.as_str().len(), tracker.codec.layout().code_len());

        let saved = tracker.record(apr).unwrap();
        tracker.reset(apr).unwrap();
        let decoded = tracker.import(code.as_str()).unwrap();
        assert_eq!(decoded.record, saved);
        assert_eq!(tracker.record(apr).unwrap(), saved);
    }

    #[test]
    fn test_share_unknown_month_fails() {
        let temp = TempDir::new().unwrap();
        assert!(tracker(&temp).share(month("2030-01")).is_err());
    }

    #[test]
    fn test_migrate_legacy_merges() {
        let temp = TempDir::new().unwrap();
        let tracker = tracker(&temp);
        let feb = month("2026-02");
        tracker.toggle(feb, 2, SecondAttempt).unwrap();

        let legacy = LegacyMigration::parse(r#"{"1":"completed","2":"in-progress"}"#).unwrap();
        let report = tracker.migrate_legacy(feb, &legacy, &LegacyMigration::default()).unwrap();
        assert_eq!(report.migrated, 1);

        let record = tracker.record(feb).unwrap();
        assert_eq!(record.status_of("feb-1"), FourthOrMorePlus);
        assert_eq!(record.status_of("feb-2"), SecondAttempt);
    }

    #[test]
    fn test_reset_and_months() {
        let temp = TempDir::new().unwrap();
        let tracker = tracker(&temp);
        let feb = month("2026-02");
        tracker.toggle(feb, 3, FirstAttempt).unwrap();

        assert_eq!(tracker.months().unwrap(), vec![feb]);
        assert!(tracker.reset(feb).unwrap());
        assert!(tracker.months().unwrap().is_empty());
        assert!(tracker.record(feb).unwrap().is_empty());
    }
}
