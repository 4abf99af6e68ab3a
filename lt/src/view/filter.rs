//! Area and status filters for problem listings

use crate::domain::{CompletionStatus, Problem};

/// Restrict a listing to one wall section
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AreaFilter {
    #[default]
    All,
    Area(String),
}

impl std::str::FromStr for AreaFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Area(s.to_string()))
        }
    }
}

/// Restrict a listing by completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    /// Any attempt tier
    Completed,
    NotCompleted,
    Exactly(CompletionStatus),
}

impl StatusFilter {
    fn matches(self, status: CompletionStatus) -> bool {
        match self {
            Self::All => true,
            Self::Completed => status.is_completed(),
            Self::NotCompleted => !status.is_completed(),
            Self::Exactly(wanted) => status == wanted,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" | "done" => Ok(Self::Completed),
            "not-completed" | "todo" => Ok(Self::NotCompleted),
            other => other
                .parse::<CompletionStatus>()
                .map(Self::Exactly)
                .map_err(|_| format!("Unknown status filter: {}", s)),
        }
    }
}

/// Combined filter; a problem must match both parts
#[derive(Debug, Clone, Default)]
pub struct ProblemFilter {
    pub area: AreaFilter,
    pub status: StatusFilter,
}

impl ProblemFilter {
    pub fn matches(&self, problem: &Problem, status: CompletionStatus) -> bool {
        let area_ok = match &self.area {
            AreaFilter::All => true,
            AreaFilter::Area(area) => problem.area.eq_ignore_ascii_case(area),
        };
        area_ok && self.status.matches(status)
    }

    pub fn apply<'a>(&self, pairs: &[(&'a Problem, CompletionStatus)]) -> Vec<(&'a Problem, CompletionStatus)> {
        pairs.iter().filter(|(p, s)| self.matches(p, *s)).copied().collect()
    }
}

/// Distinct areas in order of first appearance
pub fn areas(ladder: &[Problem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for problem in ladder {
        if !seen.contains(&problem.area) {
            seen.push(problem.area.clone());
        }
    }
    seen
}
