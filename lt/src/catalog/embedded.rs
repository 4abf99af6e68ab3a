//! Built-in catalog
//!
//! Compiled into the binary and used when no catalog file is configured.

/// YAML source of the built-in catalog
pub const DEFAULT_CATALOG: &str = include_str!("default.yml");
