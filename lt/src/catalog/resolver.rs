//! Catalog resolution and loading

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{MonthKey, Problem};

/// Looks up the ordered ladder for a month
pub trait CatalogResolver {
    /// Problems valid for `month`, ascending by id
    ///
    /// An unknown month yields an empty list rather than an error; callers
    /// treat empty as "no data for this month".
    fn problems_for_month(&self, month: MonthKey) -> Vec<Problem>;
}

impl<T: CatalogResolver + ?Sized> CatalogResolver for &T {
    fn problems_for_month(&self, month: MonthKey) -> Vec<Problem> {
        (**self).problems_for_month(month)
    }
}

/// Errors from loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Month {month} lists problem id {id} more than once")]
    DuplicateId { month: MonthKey, id: u32 },

    #[error("Stable key {key} is used by more than one problem")]
    DuplicateStableKey { key: String },

    #[error("Month {month} has a problem with id 0; ids are 1-based")]
    ZeroId { month: MonthKey },

    #[error("Month {month} has {actual} problems but share codes are sized for {expected}")]
    LadderSize {
        month: MonthKey,
        expected: usize,
        actual: usize,
    },
}

/// Catalog held in memory, keyed by month
///
/// Per-month lists are stored as given; ordering is applied on lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticCatalog {
    /// Catalog revision, bumped whenever a published month is edited
    version: u32,

    months: HashMap<MonthKey, Vec<Problem>>,
}

impl StaticCatalog {
    /// Build from month -> problems pairs, validating ids and stable keys
    pub fn new(version: u32, months: HashMap<MonthKey, Vec<Problem>>) -> Result<Self, CatalogError> {
        let catalog = Self { version, months };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in catalog
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_yaml_str(super::embedded::DEFAULT_CATALOG)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_yaml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&content)?;
        info!(
            path = %path.display(),
            version = catalog.version,
            months = catalog.months.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Overlay another catalog; its months replace ours wholesale
    pub fn merge(mut self, other: StaticCatalog) -> Result<Self, CatalogError> {
        for (month, problems) in other.months {
            debug!(%month, count = problems.len(), "Catalog month overridden");
            self.months.insert(month, problems);
        }
        self.version = self.version.max(other.version);
        self.validate()?;
        Ok(self)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Every month with a ladder, ascending
    pub fn months(&self) -> Vec<MonthKey> {
        let mut months: Vec<MonthKey> = self.months.keys().copied().collect();
        months.sort();
        months
    }

    /// Fail on the first month whose ladder is not exactly `expected` problems
    ///
    /// Share codes have one fixed layout, so every month must fill it.
    pub fn check_ladder_sizes(&self, expected: usize) -> Result<(), CatalogError> {
        for month in self.months() {
            let actual = self.months.get(&month).map_or(0, Vec::len);
            if actual != expected {
                return Err(CatalogError::LadderSize {
                    month,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut keys = HashSet::new();
        for (month, problems) in &self.months {
            let mut ids = HashSet::new();
            for problem in problems {
                if problem.id == 0 {
                    return Err(CatalogError::ZeroId { month: *month });
                }
                if !ids.insert(problem.id) {
                    return Err(CatalogError::DuplicateId {
                        month: *month,
                        id: problem.id,
                    });
                }
                if !keys.insert(problem.stable_key.as_str()) {
                    return Err(CatalogError::DuplicateStableKey {
                        key: problem.stable_key.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl CatalogResolver for StaticCatalog {
    fn problems_for_month(&self, month: MonthKey) -> Vec<Problem> {
        let mut problems = self.months.get(&month).cloned().unwrap_or_default();
        problems.sort_by_key(|p| p.id);
        problems
    }
}
