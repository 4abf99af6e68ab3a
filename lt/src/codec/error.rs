//! Share-code decode errors

use thiserror::Error;

use crate::domain::{MonthKey, MonthKeyError};

/// Why a share code could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Share code must be {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Share code carries an invalid month: {0}")]
    InvalidMonth(#[from] MonthKeyError),

    #[error("No ladder is defined for {0}")]
    UnknownMonth(MonthKey),

    #[error("Malformed share code at position {position}: {reason}")]
    MalformedDigit { position: usize, reason: String },

    #[error("Ladder for {month} has {actual} problems but share codes hold {expected}")]
    CatalogSizeMismatch {
        month: MonthKey,
        expected: usize,
        actual: usize,
    },
}

impl DecodeError {
    /// Message suitable for showing to someone who pasted a bad link
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } | Self::MalformedDigit { .. } => "That share code is not valid.",
            Self::InvalidMonth(_) => "That share code points at a month that does not exist.",
            Self::UnknownMonth(_) => "There is no ladder for the month in that share code.",
            Self::CatalogSizeMismatch { .. } => "That share code does not match this month's ladder.",
        }
    }
}
