//! SnapshotRepository port - load and save the whole book of records
//!
//! The application layer persists a `Snapshot` after every mutation and
//! restores it at startup, without knowing how collections are encoded.

use super::collection_store::StoreError;
use crate::domain::entities::Snapshot;

/// Snapshot persistence errors
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("collection '{collection}' is corrupted: {message}")]
    Corrupted { collection: String, message: String },

    #[error("could not encode collection '{collection}': {message}")]
    Encode { collection: String, message: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

pub trait SnapshotRepository {
    /// Load the stored snapshot, `None` if nothing was ever saved
    fn load(&self) -> SnapshotResult<Option<Snapshot>>;

    fn save(&self, snapshot: &Snapshot) -> SnapshotResult<()>;
}

impl<R: SnapshotRepository + ?Sized> SnapshotRepository for Box<R> {
    fn load(&self) -> SnapshotResult<Option<Snapshot>> {
        (**self).load()
    }

    fn save(&self, snapshot: &Snapshot) -> SnapshotResult<()> {
        (**self).save(snapshot)
    }
}
