//! JSON-file-backed key/value storage.
//!
//! The whole file is one JSON object of string keys to string values. Every
//! write rewrites it through a uniquely named temporary file and an atomic
//! rename, so a reader never observes a partial write. The load-modify-save
//! cycle runs under an exclusive lock on a sibling `.lock` file, which
//! serializes writers across processes.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use clarity_core::error::{ClarityError, Result};
use clarity_core::state::KeyValueStorage;
use fs2::FileExt;
use tempfile::NamedTempFile;

type Entries = BTreeMap<String, String>;

pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all entries. A missing or empty file has no entries; a corrupt
    /// file is treated the same way and overwritten on the next write.
    fn load(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let content = fs::read(&self.path)?;
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Entries::new());
        }

        // Invalid UTF-8 surfaces here as a decode error, like any other corruption.
        match serde_json::from_slice(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "discarding corrupt state file");
                Ok(Entries::new())
            }
        }
    }

    fn parent_dir(&self) -> Result<&Path> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| ClarityError::io("Path has no parent directory"))?;
        if parent.as_os_str().is_empty() {
            return Ok(Path::new("."));
        }
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
        Ok(parent)
    }

    fn save(&self, entries: &Entries) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;

        let mut tmp_file = NamedTempFile::new_in(self.parent_dir()?)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.as_file().sync_all()?;

        tmp_file
            .persist(&self.path)
            .map_err(|e| ClarityError::io(format!("Failed to replace state file: {}", e.error)))?;
        Ok(())
    }

    fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Entries),
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut entries = self.load()?;
        f(&mut entries);
        self.save(&entries)
    }
}

/// Exclusive advisory lock on `<file>.lock`, released when dropped.
///
/// The lock file itself is left in place: deleting it would let a waiting
/// process lock an unlinked inode while a newcomer locks a fresh one.
struct FileLock {
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");
        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;
        FileExt::lock_exclusive(&file).map_err(|e| {
            ClarityError::io(format!(
                "Failed to lock {}: {}",
                lock_path.display(),
                e
            ))
        })?;

        Ok(Self { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::debug!(error = %e, "failed to release state file lock");
        }
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("nested").join("state.json"));

        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        storage.set("other", "w").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));

        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
        assert_eq!(storage.get("other").unwrap().as_deref(), Some("w"));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("state.json"));
        storage.set("k", "v").unwrap();

        let mut names: Vec<String> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["state.json", "state.lock"]);
    }

    #[test]
    fn test_concurrent_writers_keep_every_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");

        let handles: Vec<_> = (0..8)
            .map(|writer| {
                let path = path.clone();
                std::thread::spawn(move || {
                    // One instance per writer, as separate processes would have.
                    let storage = JsonFileStorage::new(path);
                    for n in 0..25 {
                        storage
                            .set(&format!("w{writer}-k{n}"), &n.to_string())
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let storage = JsonFileStorage::new(path);
        let entries = storage.load().unwrap();
        assert_eq!(entries.len(), 200);
        assert_eq!(storage.get("w7-k24").unwrap().as_deref(), Some("24"));
    }

    #[test]
    fn test_corrupt_file_reads_as_empty_and_is_repaired() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        fs::write(&path, "{ definitely not json").unwrap();

        let storage = JsonFileStorage::new(path);
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_invalid_utf8_file_reads_as_empty_and_is_repaired() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        fs::write(&path, [0xff, 0xfe, b'{']).unwrap();

        let storage = JsonFileStorage::new(path);
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_remove_without_file_does_not_create_it() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        let storage = JsonFileStorage::new(path.clone());
        storage.remove("k").unwrap();
        assert!(!path.exists());
    }
}
