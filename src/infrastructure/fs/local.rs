//! Local Collection Store
//!
//! Implements the CollectionStore port on a data directory: each
//! collection is a `<name>.json` file. Writes go through a temp file in
//! the same directory and are renamed into place, under an exclusive
//! lock on `.resi.lock` so two processes never interleave a save.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::domain::ports::collection_store::{CollectionStore, StoreError, StoreResult};

const EXTENSION: &str = "json";
const LOCK_FILE: &str = ".resi.lock";

/// Directory-backed collection store
#[derive(Debug, Clone)]
pub struct FsCollectionStore {
    dir: PathBuf,
}

impl FsCollectionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, EXTENSION))
    }

    fn ensure_dir(&self) -> StoreResult<()> {
        if self.dir.exists() && !self.dir.is_dir() {
            return Err(StoreError::Unavailable(self.dir.clone()));
        }
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Run `f` while holding the exclusive store lock
    fn locked<T>(&self, f: impl FnOnce() -> StoreResult<T>) -> StoreResult<T> {
        self.ensure_dir()?;
        let lock_path = self.dir.join(LOCK_FILE);
        let lock_file = fs::File::create(&lock_path)?;
        lock_file
            .lock_exclusive()
            .map_err(|_| StoreError::Locked(lock_path.clone()))?;

        let result = f();

        let _ = lock_file.unlock();
        result
    }

    fn write_unlocked(&self, name: &str, contents: &str) -> StoreResult<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.path_for(name))
            .map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

impl CollectionStore for FsCollectionStore {
    fn read(&self, name: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(name)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, name: &str, contents: &str) -> StoreResult<()> {
        self.locked(|| self.write_unlocked(name, contents))
    }

    fn write_all(&self, collections: &[(&str, String)]) -> StoreResult<()> {
        self.locked(|| {
            for (name, contents) in collections {
                self.write_unlocked(name, contents)?;
            }
            Ok(())
        })
    }

    fn names(&self) -> StoreResult<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
