//! Points scoring for a month's ladder
//!
//! Each non-bonus problem earns the points of its status. The bonus problem,
//! the one with the highest id, is tracked but never scores.

use serde::Serialize;

use crate::domain::{CompletionStatus, Problem, ProgressRecord};

/// Score breakdown for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreSummary {
    /// Points earned
    pub total: u32,
    /// Points available: every non-bonus problem at first attempt
    pub max: u32,
    /// Completed problems, bonus included
    pub completed: usize,
    /// Problems in the ladder, bonus included
    pub problem_count: usize,
    pub bonus_completed: bool,
}

/// Points for statuses in ascending id order; the last entry is the bonus
pub fn total_points(statuses: &[CompletionStatus]) -> u32 {
    match statuses.split_last() {
        Some((_bonus, scoring)) => scoring.iter().map(|s| s.points()).sum(),
        None => 0,
    }
}

/// Score a record against its ladder
///
/// The ladder need not be sorted; the bonus is found by id.
pub fn score(ladder: &[Problem], record: &ProgressRecord) -> ScoreSummary {
    let mut summary = ScoreSummary {
        problem_count: ladder.len(),
        ..Default::default()
    };

    for problem in ladder {
        let status = record.status_of(&problem.stable_key);
        let bonus = problem.is_bonus_in(ladder);

        if status.is_completed() {
            summary.completed += 1;
            if bonus {
                summary.bonus_completed = true;
            }
        }
        if !bonus {
            summary.total += status.points();
            summary.max += CompletionStatus::FirstAttempt.points();
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CompletionStatus::*;
    use crate::testing::{ladder, month};

    #[test]
    fn test_only_bonus_scores_zero() {
        let ladder = ladder("feb", 21);
        let mut record = ProgressRecord::new(month("2026-02"));
        record.set("feb-21", FirstAttempt);

        let summary = score(&ladder, &record);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.completed, 1);
        assert!(summary.bonus_completed);

        let mut statuses = vec![NotCompleted; 21];
        statuses[20] = FirstAttempt;
        assert_eq!(total_points(&statuses), 0);
    }

    #[test]
    fn test_all_first_attempt_is_max() {
        let ladder = ladder("feb", 21);
        let mut record = ProgressRecord::new(month("2026-02"));
        for problem in &ladder[..20] {
            record.set(&problem.stable_key, FirstAttempt);
        }

        let summary = score(&ladder, &record);
        assert_eq!(summary.total, 200);
        assert_eq!(summary.max, 200);
        assert!(!summary.bonus_completed);

        let mut statuses = vec![FirstAttempt; 20];
        statuses.push(NotCompleted);
        assert_eq!(total_points(&statuses), 200);
    }

    #[test]
    fn test_mixed_tiers() {
        let ladder = ladder("feb", 21);
        let mut record = ProgressRecord::new(month("2026-02"));
        record.set("feb-1", FirstAttempt);
        record.set("feb-2", SecondAttempt);
        record.set("feb-3", ThirdAttempt);
        record.set("feb-4", FourthOrMorePlus);
        record.set("feb-21", SecondAttempt);

        let summary = score(&ladder, &record);
        assert_eq!(summary.total, 10 + 7 + 4 + 1);
        assert_eq!(summary.completed, 5);
        assert_eq!(summary.problem_count, 21);
    }

    #[test]
    fn test_bonus_found_by_id_not_position() {
        let mut ladder = ladder("feb", 21);
        ladder.reverse();
        let mut record = ProgressRecord::new(month("2026-02"));
        record.set("feb-21", FirstAttempt);
        record.set("feb-1", FirstAttempt);

        assert_eq!(score(&ladder, &record).total, 10);
    }

    #[test]
    fn test_empty_ladder() {
        let record = ProgressRecord::new(month("2026-02"));
        assert_eq!(score(&[], &record), ScoreSummary::default());
        assert_eq!(total_points(&[]), 0);
    }
}
