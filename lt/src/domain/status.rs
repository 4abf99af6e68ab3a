//! Completion status for a single ladder problem

use serde::{Deserialize, Serialize};

/// Which attempt a problem was completed on
///
/// Ordered by attempt count. `NotCompleted` is the implicit default and is
/// never written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CompletionStatus {
    #[default]
    NotCompleted,
    FirstAttempt,
    SecondAttempt,
    ThirdAttempt,
    #[serde(rename = "fourth-or-more")]
    FourthOrMorePlus,
}

impl CompletionStatus {
    /// Every status, in attempt order
    pub const ALL: [CompletionStatus; 5] = [
        Self::NotCompleted,
        Self::FirstAttempt,
        Self::SecondAttempt,
        Self::ThirdAttempt,
        Self::FourthOrMorePlus,
    ];

    /// Points awarded for a non-bonus problem at this status
    pub fn points(self) -> u32 {
        match self {
            Self::NotCompleted => 0,
            Self::FirstAttempt => 10,
            Self::SecondAttempt => 7,
            Self::ThirdAttempt => 4,
            Self::FourthOrMorePlus => 1,
        }
    }

    /// Base-5 digit used in share codes
    pub fn digit(self) -> u8 {
        match self {
            Self::NotCompleted => 0,
            Self::FirstAttempt => 1,
            Self::SecondAttempt => 2,
            Self::ThirdAttempt => 3,
            Self::FourthOrMorePlus => 4,
        }
    }

    /// Inverse of [`CompletionStatus::digit`]
    pub fn from_digit(digit: u8) -> Option<Self> {
        Self::ALL.get(digit as usize).copied()
    }

    pub fn is_completed(self) -> bool {
        self != Self::NotCompleted
    }

    /// Short human label for listings
    pub fn label(self) -> &'static str {
        match self {
            Self::NotCompleted => "-",
            Self::FirstAttempt => "1st",
            Self::SecondAttempt => "2nd",
            Self::ThirdAttempt => "3rd",
            Self::FourthOrMorePlus => "4th+",
        }
    }
}

impl std::fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotCompleted => write!(f, "not-completed"),
            Self::FirstAttempt => write!(f, "first-attempt"),
            Self::SecondAttempt => write!(f, "second-attempt"),
            Self::ThirdAttempt => write!(f, "third-attempt"),
            Self::FourthOrMorePlus => write!(f, "fourth-or-more"),
        }
    }
}

impl std::str::FromStr for CompletionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not-completed" | "none" | "0" => Ok(Self::NotCompleted),
            "first-attempt" | "first" | "1" => Ok(Self::FirstAttempt),
            "second-attempt" | "second" | "2" => Ok(Self::SecondAttempt),
            "third-attempt" | "third" | "3" => Ok(Self::ThirdAttempt),
            "fourth-or-more" | "fourth" | "4" | "4+" => Ok(Self::FourthOrMorePlus),
            _ => Err(format!("Unknown completion status: {}", s)),
        }
    }
}
