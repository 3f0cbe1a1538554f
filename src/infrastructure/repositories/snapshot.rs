//! JSON Snapshot Repository
//!
//! Implements the SnapshotRepository port on top of any CollectionStore.
//! Each collection is a pretty-printed JSON array of camelCase records
//! with RFC 3339 timestamps and money as decimal strings.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::domain::entities::Snapshot;
use crate::domain::ports::{CollectionStore, SnapshotError, SnapshotRepository, SnapshotResult};

pub const COMPANIES: &str = "companies";
pub const MEMBERS: &str = "members";
pub const REFERRALS: &str = "referrals";
pub const COMMISSIONS: &str = "commissions";
pub const AREAS: &str = "areas";
pub const DISTRIBUTIONS: &str = "distributions";

/// Every collection a snapshot is split into, in save order
pub const COLLECTIONS: [&str; 6] = [COMPANIES, MEMBERS, REFERRALS, COMMISSIONS, AREAS, DISTRIBUTIONS];

pub struct JsonSnapshotRepository<S: CollectionStore> {
    store: S,
}

impl<S: CollectionStore> JsonSnapshotRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn decode<T: DeserializeOwned>(&self, name: &str) -> SnapshotResult<Vec<T>> {
        match self.store.read(name)? {
            None => Ok(Vec::new()),
            Some(contents) if contents.trim().is_empty() => Ok(Vec::new()),
            Some(contents) => serde_json::from_str(&contents).map_err(|e| SnapshotError::Corrupted {
                collection: name.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

fn encode<T: Serialize>(name: &str, records: &[T]) -> SnapshotResult<(&'static str, String)> {
    let collection = COLLECTIONS
        .into_iter()
        .find(|c| *c == name)
        .ok_or_else(|| SnapshotError::Encode {
            collection: name.to_string(),
            message: "unknown collection".to_string(),
        })?;
    let json = serde_json::to_string_pretty(records).map_err(|e| SnapshotError::Encode {
        collection: name.to_string(),
        message: e.to_string(),
    })?;
    Ok((collection, json))
}

impl<S: CollectionStore> SnapshotRepository for JsonSnapshotRepository<S> {
    fn load(&self) -> SnapshotResult<Option<Snapshot>> {
        let stored = self.store.names()?;
        if !COLLECTIONS.iter().any(|c| stored.iter().any(|s| s == c)) {
            debug!("no stored collections");
            return Ok(None);
        }

        Ok(Some(Snapshot {
            companies: self.decode(COMPANIES)?,
            members: self.decode(MEMBERS)?,
            referrals: self.decode(REFERRALS)?,
            commissions: self.decode(COMMISSIONS)?,
            areas: self.decode(AREAS)?,
            distributions: self.decode(DISTRIBUTIONS)?,
        }))
    }

    fn save(&self, snapshot: &Snapshot) -> SnapshotResult<()> {
        let collections = [
            encode(COMPANIES, &snapshot.companies)?,
            encode(MEMBERS, &snapshot.members)?,
            encode(REFERRALS, &snapshot.referrals)?,
            encode(COMMISSIONS, &snapshot.commissions)?,
            encode(AREAS, &snapshot.areas)?,
            encode(DISTRIBUTIONS, &snapshot.distributions)?,
        ];
        self.store.write_all(&collections)?;
        debug!(collections = collections.len(), "collections written");
        Ok(())
    }
}
