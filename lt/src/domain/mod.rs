//! Domain types for the ladder tracker
//!
//! Core domain types: MonthKey, CompletionStatus, Problem, ProgressRecord.
//! Everything here is plain data; persistence and encoding live elsewhere.

mod month;
mod problem;
mod record;
mod status;

pub use month::{MonthKey, MonthKeyError};
pub use problem::Problem;
pub use record::ProgressRecord;
pub use status::CompletionStatus;
