//! Shared fixtures for unit tests

use std::collections::HashMap;

use crate::catalog::StaticCatalog;
use crate::domain::{MonthKey, Problem};

pub(crate) fn month(s: &str) -> MonthKey {
    s.parse().unwrap()
}

pub(crate) fn problem(id: u32, key: &str, area: &str) -> Problem {
    Problem {
        id,
        stable_key: key.to_string(),
        display_name: format!("Ladder {}", id),
        color: "#FF6B6B".to_string(),
        area: area.to_string(),
    }
}

/// A ladder of `count` problems keyed `{prefix}-{id}`, areas cycling through three walls
pub(crate) fn ladder(prefix: &str, count: u32) -> Vec<Problem> {
    const AREAS: [&str; 3] = ["Main Wall", "Cave", "Slab Section"];
    (1..=count)
        .map(|id| problem(id, &format!("{}-{}", prefix, id), AREAS[(id as usize - 1) % AREAS.len()]))
        .collect()
}

/// A catalog holding a single month
pub(crate) fn catalog_with(month_key: &str, problems: Vec<Problem>) -> StaticCatalog {
    let mut months = HashMap::new();
    months.insert(month(month_key), problems);
    StaticCatalog::new(1, months).unwrap()
}
