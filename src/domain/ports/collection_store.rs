//! CollectionStore port - durable key-value storage by collection name
//!
//! Each collection is stored as one opaque text document. The store does
//! not interpret the contents; encoding belongs to the snapshot repository.

use std::path::PathBuf;

/// Result type for collection store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Collection store errors
#[derive(Debug)]
pub enum StoreError {
    /// Storage location unusable (missing parent, not a directory)
    Unavailable(PathBuf),
    /// Another process holds the store lock
    Locked(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(path) => {
                write!(f, "Storage unavailable: {}", path.display())
            }
            StoreError::Locked(path) => write!(f, "Storage locked: {}", path.display()),
            StoreError::Io(err) => write!(f, "I/O error: {}", err),
            StoreError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Abstract collection storage
///
/// Implementations:
/// - `FsCollectionStore` - one JSON file per collection in a data directory
/// - `MemoryCollectionStore` - in-memory for testing
pub trait CollectionStore {
    /// Read a collection, `None` if it was never written
    fn read(&self, name: &str) -> StoreResult<Option<String>>;

    /// Replace a collection's contents
    fn write(&self, name: &str, contents: &str) -> StoreResult<()>;

    /// Write several collections as one unit.
    ///
    /// The default writes them in order; adapters that can hold a lock
    /// across the batch should override this.
    fn write_all(&self, collections: &[(&str, String)]) -> StoreResult<()> {
        for (name, contents) in collections {
            self.write(name, contents)?;
        }
        Ok(())
    }

    /// Names of the collections currently stored, sorted
    fn names(&self) -> StoreResult<Vec<String>>;
}
