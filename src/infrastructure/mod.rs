//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Collection stores (data directory, in-memory)
//! - `repositories/` - Snapshot repository (JSON collections)
//! - `events/` - Event sinks (NDJSON)
//! - `clock` - System and manual clocks

pub mod clock;
pub mod events;
pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use clock::{ManualClock, SystemClock};
pub use events::JsonEventSink;
pub use fs::{FsCollectionStore, MemoryCollectionStore};
pub use repositories::JsonSnapshotRepository;
