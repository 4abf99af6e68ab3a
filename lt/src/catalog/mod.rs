//! Ladder catalog: the fixed set of problems for each month
//!
//! The catalog is read-only configuration injected into the codec and the
//! tracker. [`CatalogResolver`] is the seam; [`StaticCatalog`] is the YAML-backed
//! implementation, seeded from the [`embedded`] default and optionally merged
//! with a user catalog file.

pub mod embedded;
mod resolver;

pub use resolver::{CatalogError, CatalogResolver, StaticCatalog};
