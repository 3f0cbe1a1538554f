//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod collection_store;
pub mod snapshot_repository;
pub mod store_events;

pub use clock::Clock;
pub use collection_store::{CollectionStore, StoreError, StoreResult};
pub use snapshot_repository::{SnapshotError, SnapshotRepository, SnapshotResult};
pub use store_events::{NoopEventSink, StoreEvent, StoreEventSink};
