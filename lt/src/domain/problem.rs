//! Catalog entries for ladder problems

use serde::{Deserialize, Serialize};

/// An immutable catalog entry for one ladder problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Problem {
    /// 1-based position in the month's ladder, the ordering key
    pub id: u32,
    /// Persistence key, independent of `id` so reordering never corrupts saved progress
    pub stable_key: String,
    /// Name shown to the user
    #[serde(rename = "name")]
    pub display_name: String,
    /// Hold color, e.g. `#FF6B6B`
    pub color: String,
    /// Wall section the problem is set on
    pub area: String,
}

impl Problem {
    /// Whether this is the bonus problem of the given ordered ladder
    ///
    /// The bonus problem is the one with the highest id.
    pub fn is_bonus_in(&self, ladder: &[Problem]) -> bool {
        ladder.iter().map(|p| p.id).max() == Some(self.id)
    }
}
