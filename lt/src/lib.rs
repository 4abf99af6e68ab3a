//! laddertrack - monthly bouldering ladder tracker
//!
//! Tracks which of a month's ladder problems have been completed and on which
//! attempt, scores the month, and packs the whole month into a short share
//! code that can be pasted into a link and imported elsewhere.
//!
//! # Core Concepts
//!
//! - **Ladder**: the fixed, ordered set of problems for one month, from the catalog
//! - **Stable keys**: progress is stored by a problem's stable key, never its position
//! - **Toggle semantics**: choosing a problem's current status again clears it
//! - **Share codes**: 18 characters, month plus one base-5 digit per problem
//!
//! # Modules
//!
//! - [`domain`] - month keys, statuses, problems, progress records
//! - [`catalog`] - catalog resolver trait and the YAML-backed catalog
//! - [`codec`] - share code encoding and decoding
//! - [`scoring`] - points, with the bonus problem excluded
//! - [`tracker`] - persistence-backed application service
//! - [`view`] - filters and the completion grid
//! - [`migrate`] - legacy two-state progress import
//! - [`share`] - share links carried in URL fragments
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod catalog;
pub mod cli;
pub mod codec;
pub mod config;
pub mod domain;
pub mod migrate;
pub mod scoring;
pub mod share;
pub mod tracker;
pub mod view;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use catalog::{CatalogError, CatalogResolver, StaticCatalog};
pub use codec::{ChunkLayout, DecodeError, DecodedProgress, ProgressCodec, ShareCode};
pub use config::Config;
pub use domain::{CompletionStatus, MonthKey, Problem, ProgressRecord};
pub use migrate::{LegacyMigration, MigrationReport};
pub use scoring::ScoreSummary;
pub use tracker::Tracker;
