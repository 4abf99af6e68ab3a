//! ProgressStore - file-backed persistence for monthly ladder progress
//!
//! Holds one mapping per month key, each mapping a problem's stable key to its
//! status string. The store never interprets either side; callers own the
//! meaning of month keys and status strings.
//!
//! # Layout
//!
//! ```text
//! progress.json        # { "2026-02": { "<stable-key>": "first-attempt", ... }, ... }
//! progress.json.lock   # advisory lock held during read-modify-write
//! ```
//!
//! # Example
//!
//! ```ignore
//! use progressstore::ProgressStore;
//!
//! let store = ProgressStore::open("progress.json")?;
//! let mut entries = store.load("2026-02")?;
//! entries.insert("3f1c...".to_string(), "first-attempt".to_string());
//! store.save("2026-02", &entries)?;
//! ```

mod error;
mod store;

pub use error::StoreError;
pub use store::{MonthEntries, ProgressStore};

/// Result alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
