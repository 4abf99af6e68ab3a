//! Core ProgressStore implementation

use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{Result, StoreError};

/// Stable key -> status string for a single month
pub type MonthEntries = BTreeMap<String, String>;

/// Month key -> entries, the full on-disk document
type Document = BTreeMap<String, MonthEntries>;

/// The main progress store
#[derive(Debug, Clone)]
pub struct ProgressStore {
    /// Path of the JSON document
    path: PathBuf,
}

impl ProgressStore {
    /// Open a store backed by the given file, creating parent directories as needed
    ///
    /// The file itself is created lazily on the first save.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        debug!(?path, "Opened progress store");
        Ok(Self { path })
    }

    /// Load the entries for a month; an unknown month yields an empty mapping
    pub fn load(&self, month: &str) -> Result<MonthEntries> {
        let mut doc = self.read_document()?;
        Ok(doc.remove(month).unwrap_or_default())
    }

    /// Replace the entries for a month
    pub fn save(&self, month: &str, entries: &MonthEntries) -> Result<()> {
        self.update(|doc| {
            doc.insert(month.to_string(), entries.clone());
        })?;
        debug!(month, count = entries.len(), "Saved month progress");
        Ok(())
    }

    /// Remove a month entirely, returning whether anything was stored for it
    pub fn remove(&self, month: &str) -> Result<bool> {
        let mut removed = false;
        self.update(|doc| {
            removed = doc.remove(month).is_some();
        })?;
        if removed {
            info!(month, "Removed month progress");
        }
        Ok(removed)
    }

    /// List every month key with stored progress, in ascending order
    pub fn months(&self) -> Result<Vec<String>> {
        Ok(self.read_document()?.into_keys().collect())
    }

    /// Read-modify-write the whole document under an exclusive lock
    fn update(&self, apply: impl FnOnce(&mut Document)) -> Result<()> {
        let lock_path = self.sibling("lock");
        let lock = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| StoreError::io(&lock_path, e))?;
        lock.lock_exclusive().map_err(|e| StoreError::io(&lock_path, e))?;

        let result = self.read_document().and_then(|mut doc| {
            apply(&mut doc);
            self.write_document(&doc)
        });

        // Released on drop as well; an explicit unlock surfaces errors in the log
        if let Err(e) = FileExt::unlock(&lock) {
            debug!(error = %e, "Failed to release store lock");
        }
        result
    }

    fn read_document(&self) -> Result<Document> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        if content.trim().is_empty() {
            return Ok(Document::new());
        }
        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Write to a temp file then rename over the original
    fn write_document(&self, doc: &Document) -> Result<()> {
        let tmp_path = self.sibling("tmp");
        let content = serde_json::to_string_pretty(doc)?;

        let mut file = fs::File::create(&tmp_path).map_err(|e| StoreError::io(&tmp_path, e))?;
        writeln!(file, "{}", content).map_err(|e| StoreError::io(&tmp_path, e))?;
        file.sync_all().map_err(|e| StoreError::io(&tmp_path, e))?;

        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))
    }

    fn sibling(&self, extension: &str) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".");
        name.push(extension);
        self.path.with_file_name(name)
    }
}
