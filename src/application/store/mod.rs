//! Domain Store
//!
//! The single owner of the cooperative's books. Holds the in-memory
//! snapshot, applies commands through the domain services, and saves
//! after every successful mutation.
//!
//! Saving is fire-and-forget: a failed save is logged, reported to the
//! event sink and remembered in `last_persist_error`, but the command
//! that triggered it still succeeds and in-memory state is kept.

mod commands;
mod queries;

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::seed::default_areas;
use crate::domain::entities::{Area, NewArea, Snapshot};
use crate::domain::policies::TransitionPolicy;
use crate::domain::ports::{Clock, NoopEventSink, SnapshotRepository, StoreEvent, StoreEventSink};
use crate::error::ResiResult;

/// Store construction options
#[derive(Debug, Clone, PartialEq)]
pub struct StoreOptions {
    pub policy: TransitionPolicy,
    /// Areas created for a fresh store, or to repair one without areas
    pub seed_areas: Vec<NewArea>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            policy: TransitionPolicy::default(),
            seed_areas: default_areas(),
        }
    }
}

/// How the store obtained its initial state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOrigin {
    /// Restored from the repository
    Loaded,
    /// Nothing stored yet; started from seed data
    Seeded,
}

/// Domain store - owns the snapshot and applies commands to it
///
/// Parameterized by its ports so tests can run against in-memory
/// storage and a manual clock.
pub struct DomainStore<R, C>
where
    R: SnapshotRepository,
    C: Clock,
{
    repo: R,
    clock: C,
    policy: TransitionPolicy,
    events: Arc<dyn StoreEventSink>,
    snapshot: Snapshot,
    origin: OpenOrigin,
    last_persist_error: Option<String>,
}

impl<R, C> DomainStore<R, C>
where
    R: SnapshotRepository,
    C: Clock,
{
    /// Open the store: restore the saved snapshot, or seed and save a new one.
    ///
    /// Fails only when stored data cannot be read or decoded.
    pub fn open(repo: R, clock: C, options: StoreOptions) -> ResiResult<Self> {
        Self::open_with_events(repo, clock, options, Arc::new(NoopEventSink))
    }

    pub fn open_with_events(
        repo: R,
        clock: C,
        options: StoreOptions,
        events: Arc<dyn StoreEventSink>,
    ) -> ResiResult<Self> {
        let seed_areas = if options.seed_areas.is_empty() {
            default_areas()
        } else {
            options.seed_areas
        };

        let (snapshot, origin) = match repo.load()? {
            Some(snapshot) => (snapshot, OpenOrigin::Loaded),
            None => {
                let mut snapshot = Snapshot::new();
                snapshot.areas = seed_areas.iter().cloned().map(Area::create).collect();
                (snapshot, OpenOrigin::Seeded)
            }
        };

        let mut store = Self {
            repo,
            clock,
            policy: options.policy,
            events,
            snapshot,
            origin,
            last_persist_error: None,
        };

        match origin {
            OpenOrigin::Seeded => {
                info!(areas = store.snapshot.areas.len(), "seeded new store");
                store.persist();
            }
            OpenOrigin::Loaded => {
                debug!(
                    companies = store.snapshot.companies.len(),
                    members = store.snapshot.members.len(),
                    referrals = store.snapshot.referrals.len(),
                    areas = store.snapshot.areas.len(),
                    "loaded snapshot"
                );
                if store.snapshot.areas.is_empty() {
                    warn!("stored snapshot has no areas; restoring seed areas");
                    store.snapshot.areas = seed_areas.into_iter().map(Area::create).collect();
                    store.persist();
                }
                for issue in store.snapshot.verify() {
                    warn!(%issue, "inconsistent snapshot");
                }
            }
        }

        Ok(store)
    }

    /// Replace the event sink
    pub fn with_events(mut self, events: Arc<dyn StoreEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    pub fn origin(&self) -> OpenOrigin {
        self.origin
    }

    /// Read-only view of everything the store holds
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Error from the most recent save, cleared by the next successful one
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    fn emit(&self, event: StoreEvent) {
        self.events.on_event(event);
    }

    fn persist(&mut self) {
        match self.repo.save(&self.snapshot) {
            Ok(()) => {
                debug!("snapshot saved");
                self.last_persist_error = None;
            }
            Err(err) => {
                let error = err.to_string();
                warn!(%error, "failed to save snapshot; keeping in-memory state");
                self.emit(StoreEvent::PersistFailed {
                    error: error.clone(),
                });
                self.last_persist_error = Some(error);
            }
        }
    }
}
