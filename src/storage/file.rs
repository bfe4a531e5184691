use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::storage::{Storage, StorageError, StorageKey};

/// One JSON file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Platform data directory (`~/.local/share/memoiry` on Linux),
    /// falling back to the current directory when unavailable.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("memoiry")
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io { path, source: err }),
        }
    }

    fn write(&self, key: StorageKey, payload: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|err| StorageError::Io {
            path: self.dir.clone(),
            source: err,
        })?;
        let path = self.path(key);
        fs::write(&path, payload).map_err(|err| StorageError::Io { path, source: err })
    }

    fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        let path = self.path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io { path, source: err }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_read_remove_cycle() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("memoiry"));

        assert_eq!(storage.read(StorageKey::GameBackup).unwrap(), None);
        storage.write(StorageKey::GameBackup, "{}").unwrap();
        assert_eq!(
            storage.read(StorageKey::GameBackup).unwrap().as_deref(),
            Some("{}")
        );
        storage.remove(StorageKey::GameBackup).unwrap();
        assert_eq!(storage.read(StorageKey::GameBackup).unwrap(), None);
    }

    #[test]
    fn removing_a_missing_key_is_fine() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf());
        storage.remove(StorageKey::Configuration).unwrap();
    }

    #[test]
    fn keys_map_to_separate_files() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf());
        storage.write(StorageKey::GameBackup, "a").unwrap();
        storage.write(StorageKey::HighScores, "b").unwrap();
        assert_eq!(
            storage.read(StorageKey::GameBackup).unwrap().as_deref(),
            Some("a")
        );
        assert_eq!(
            storage.read(StorageKey::HighScores).unwrap().as_deref(),
            Some("b")
        );
    }
}
