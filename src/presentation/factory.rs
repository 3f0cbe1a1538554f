//! Store Factory
//!
//! Creates the domain store with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::application::{DomainStore, StoreOptions};
use crate::config::Config;
use crate::domain::ports::{NoopEventSink, StoreEventSink};
use crate::error::ResiResult;
use crate::infrastructure::{FsCollectionStore, JsonEventSink, JsonSnapshotRepository, SystemClock};

/// Type alias for the store backed by a data directory
pub type ConcreteStore = DomainStore<JsonSnapshotRepository<FsCollectionStore>, SystemClock>;

/// Open the store kept in `data_dir`
///
/// Seeds and saves a new store when the directory holds no collections.
pub fn create_store(
    data_dir: &Path,
    options: StoreOptions,
    events: Arc<dyn StoreEventSink>,
) -> ResiResult<ConcreteStore> {
    let repo = JsonSnapshotRepository::new(FsCollectionStore::new(data_dir));
    DomainStore::open_with_events(repo, SystemClock, options, events)
}

/// Open the store the configuration points at
pub fn create_store_from_config(
    config: &Config,
    events: Arc<dyn StoreEventSink>,
) -> ResiResult<ConcreteStore> {
    create_store(&config.data_dir(), config.store_options(), events)
}

/// Event sink for `--events`: none, stderr for `-`, or an NDJSON file
pub fn create_event_sink(target: Option<&Path>) -> io::Result<Arc<dyn StoreEventSink>> {
    match target {
        None => Ok(Arc::new(NoopEventSink)),
        Some(path) if path == Path::new("-") => Ok(Arc::new(JsonEventSink::stderr())),
        Some(path) => Ok(Arc::new(JsonEventSink::append(path)?)),
    }
}
