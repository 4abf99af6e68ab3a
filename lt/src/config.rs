//! laddertrack configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::StaticCatalog;
use crate::codec::DEFAULT_PROBLEM_COUNT;
use crate::domain::CompletionStatus;
use crate::migrate::LegacyMigration;

/// Main laddertrack configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Progress storage configuration
    pub storage: StorageConfig,

    /// Ladder catalog source
    pub catalog: CatalogConfig,

    /// Share link settings
    pub share: ShareConfig,

    /// Share code sizing
    pub codec: CodecConfig,

    /// Legacy import settings
    pub migration: MigrationConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .laddertrack.yml
        let local_config = PathBuf::from(".laddertrack.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/laddertrack/laddertrack.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("laddertrack").join("laddertrack.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Build the catalog: the built-in ladders, overlaid with the configured file if any
    ///
    /// Every month must have exactly `codec.problems-per-month` problems.
    pub fn load_catalog(&self) -> Result<StaticCatalog> {
        let mut catalog = StaticCatalog::embedded().context("Built-in catalog is invalid")?;
        if let Some(path) = &self.catalog.path {
            let user = StaticCatalog::load(path).context(format!("Failed to load catalog {}", path.display()))?;
            catalog = catalog.merge(user)?;
        }
        catalog
            .check_ladder_sizes(self.codec.problems_per_month)
            .context("Catalog does not match codec.problems-per-month")?;

        tracing::info!(
            version = catalog.version(),
            months = catalog.months().len(),
            "Catalog ready"
        );
        Ok(catalog)
    }

    pub fn legacy_migration(&self) -> Result<LegacyMigration> {
        LegacyMigration::new(self.migration.legacy_completed_as).map_err(|e| eyre::eyre!(e))
    }
}

/// Progress storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the progress file
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("laddertrack")
                .join("progress.json"),
        }
    }
}

/// Ladder catalog source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// YAML catalog merged over the built-in one
    pub path: Option<PathBuf>,
}

/// Share link settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Page that reads the code from its URL fragment
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ladder.local/".to_string(),
        }
    }
}

/// Share code sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Problems per monthly ladder, bonus included
    #[serde(rename = "problems-per-month")]
    pub problems_per_month: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            problems_per_month: DEFAULT_PROBLEM_COUNT,
        }
    }
}

/// Legacy import settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Attempt tier given to legacy `completed` entries
    #[serde(rename = "legacy-completed-as")]
    pub legacy_completed_as: CompletionStatus,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            legacy_completed_as: CompletionStatus::FourthOrMorePlus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, CatalogResolver};
    use crate::testing::month;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.codec.problems_per_month, 21);
        assert_eq!(config.share.base_url, "https://ladder.local/");
        assert_eq!(config.migration.legacy_completed_as, CompletionStatus::FourthOrMorePlus);
        assert!(config.storage.path.ends_with("laddertrack/progress.json"));
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
share:
  base-url: https://example.com/ladder
migration:
  legacy-completed-as: first-attempt
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.share.base_url, "https://example.com/ladder");
        assert_eq!(config.migration.legacy_completed_as, CompletionStatus::FirstAttempt);
        assert_eq!(config.codec.problems_per_month, 21);
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "storage:\n  path: /tmp/ladder/progress.json\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.storage.path, PathBuf::from("/tmp/ladder/progress.json"));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    fn catalog_yaml(month_key: &str, count: u32) -> String {
        let mut yaml = format!("version: 3\nmonths:\n  \"{}\":\n", month_key);
        for id in 1..=count {
            yaml.push_str(&format!(
                "    - id: {id}\n      stable-key: {month_key}-{id}\n      name: Ladder {id}\n      color: \"#000000\"\n      area: Cave\n"
            ));
        }
        yaml
    }

    fn config_with_catalog(temp: &TempDir, yaml: &str) -> Config {
        let catalog_path = temp.path().join("catalog.yml");
        fs::write(&catalog_path, yaml).unwrap();
        Config {
            catalog: CatalogConfig {
                path: Some(catalog_path),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_load_catalog_merges_user_file() {
        let temp = TempDir::new().unwrap();
        let config = config_with_catalog(&temp, &catalog_yaml("2027-01", 21));

        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.version(), 3);
        assert_eq!(catalog.problems_for_month(month("2027-01")).len(), 21);
        assert_eq!(catalog.problems_for_month(month("2026-02")).len(), 21);
    }

    #[test]
    fn test_load_catalog_rejects_wrong_ladder_size() {
        let temp = TempDir::new().unwrap();
        let config = config_with_catalog(&temp, &catalog_yaml("2026-04", 20));

        let err = config.load_catalog().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::LadderSize {
                expected: 21,
                actual: 20,
                ..
            })
        ));
    }

    #[test]
    fn test_legacy_migration_rejects_not_completed() {
        let mut config = Config::default();
        config.migration.legacy_completed_as = CompletionStatus::NotCompleted;
        assert!(config.legacy_migration().is_err());
    }
}
