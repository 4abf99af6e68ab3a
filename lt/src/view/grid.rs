//! Completion grid, one cell per problem in id order

use crate::domain::{CompletionStatus, Problem, ProgressRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub id: u32,
    pub status: CompletionStatus,
    pub bonus: bool,
}

impl GridCell {
    pub fn completed(&self) -> bool {
        self.status.is_completed()
    }
}

pub fn ladder_grid(ladder: &[Problem], record: &ProgressRecord) -> Vec<GridCell> {
    let mut cells: Vec<GridCell> = ladder
        .iter()
        .map(|p| GridCell {
            id: p.id,
            status: record.status_of(&p.stable_key),
            bonus: p.is_bonus_in(ladder),
        })
        .collect();
    cells.sort_by_key(|c| c.id);
    cells
}
