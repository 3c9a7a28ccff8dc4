use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{Storage, StorageError};

/// Store kept as one JSON object on disk, mapping keys to JSON text.
///
/// The whole file is read on open and rewritten on every `set`. Writes go to a
/// sibling `.tmp` file that is then renamed over the store, and the in-memory
/// map only changes once that succeeds.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens the store at `path`. A missing or empty file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let values: BTreeMap<String, String> = if path.exists() && path.metadata()?.len() > 0 {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents).map_err(|e| StorageError::CorruptStore {
                path: path.clone(),
                reason: e.to_string(),
            })?
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), keys = values.len(), "opened file store");
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                info!(dir = %parent.display(), "created store directory");
            }
        }
        let serialized = serde_json::to_string_pretty(values)?;
        let temp = self.temp_path();
        fs::write(&temp, serialized)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        let mut updated = self.values.clone();
        updated.insert(key.to_string(), value);
        self.save(&updated)?;
        self.values = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_empty_file_opens_as_empty_store() -> anyhow::Result<()> {
        let file = NamedTempFile::new()?;
        let storage = FileStorage::open(file.path())?;
        assert_eq!(storage.get("dailyMeals")?, None);
        Ok(())
    }

    #[test]
    fn test_values_survive_reopen() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("store.json");

        let mut storage = FileStorage::open(&path)?;
        storage.set("dailyMeals", "[]".to_string())?;
        assert!(path.exists());

        let reopened = FileStorage::open(&path)?;
        assert_eq!(reopened.get("dailyMeals")?, Some("[]".to_string()));
        Ok(())
    }

    #[test]
    fn test_failed_write_keeps_previous_value() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("store.json");
        let mut storage = FileStorage::open(&path)?;
        storage.set("dailyMeals", "[1]".to_string())?;

        // A directory squatting on the temp path makes the next write fail.
        fs::create_dir(storage.temp_path())?;
        assert!(matches!(
            storage.set("dailyMeals", "[2]".to_string()),
            Err(StorageError::Io(_))
        ));

        assert_eq!(storage.get("dailyMeals")?, Some("[1]".to_string()));
        let reopened = FileStorage::open(&path)?;
        assert_eq!(reopened.get("dailyMeals")?, Some("[1]".to_string()));
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_reported() -> anyhow::Result<()> {
        let file = NamedTempFile::new()?;
        fs::write(file.path(), "{ not valid")?;
        let err = FileStorage::open(file.path()).unwrap_err();
        assert!(matches!(err, StorageError::CorruptStore { .. }));
        assert!(err.to_string().contains("is corrupt"));
        Ok(())
    }
}
