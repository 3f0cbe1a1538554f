//! Scenario: books survive a restart
//!
//! Journey: record a deal, close it, quit, and open the same data
//! directory again.
//!
//! Success Criteria:
//! - Everything written is read back exactly
//! - A damaged collection is reported instead of silently reset
//! - A failed save never loses the in-memory change

use std::sync::Arc;

use resi::application::{DomainStore, OpenOrigin, StoreOptions};
use resi::domain::ports::NoopEventSink;
use resi::domain::value_objects::ReferralStatus;
use resi::infrastructure::{JsonSnapshotRepository, MemoryCollectionStore};
use resi::presentation::create_store;
use resi::ResiError;

use crate::common::*;

#[test]
fn scenario_reopen_restores_everything() {
    let dir = tempfile::tempdir().unwrap();

    let saved = {
        let mut store = create_store(dir.path(), StoreOptions::default(), Arc::new(NoopEventSink)).unwrap();
        assert_eq!(store.origin(), OpenOrigin::Seeded);

        let company = store.create_company(company("Construtora Alfa", "15")).unwrap();
        let member = store.create_member(member("Ana Lima")).unwrap();
        let created = store
            .create_referral(referral(company.id, member.id, "1000"))
            .unwrap();
        store
            .transition_referral_status(created.id, ReferralStatus::Completed)
            .unwrap();
        assert_eq!(store.last_persist_error(), None);
        store.snapshot().clone()
    };

    let reopened = create_store(dir.path(), StoreOptions::default(), Arc::new(NoopEventSink)).unwrap();
    assert_eq!(reopened.origin(), OpenOrigin::Loaded);
    assert_eq!(reopened.snapshot(), &saved);
    assert!(reopened
        .list_areas()
        .iter()
        .all(|a| a.balance == money("30")));
}

#[test]
fn scenario_damaged_collection_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    create_store(dir.path(), StoreOptions::default(), Arc::new(NoopEventSink)).unwrap();
    std::fs::write(dir.path().join("referrals.json"), "[{\"id\": 42").unwrap();

    let err = match create_store(dir.path(), StoreOptions::default(), Arc::new(NoopEventSink)) {
        Ok(_) => panic!("damaged referrals should not load"),
        Err(err) => err,
    };
    assert!(matches!(err, ResiError::Persistence(_)));
    assert!(err.to_string().contains("referrals"));
}

#[test]
fn scenario_failed_save_keeps_working_in_memory() {
    let clock = clock();
    let backing = MemoryCollectionStore::new();
    let repo = JsonSnapshotRepository::new(backing.clone());
    let mut store = DomainStore::open(repo, &clock, StoreOptions::default()).unwrap();

    backing.fail_writes(true);
    let company = store.create_company(company("Construtora Alfa", "15")).unwrap();
    assert!(store.last_persist_error().is_some());
    assert_eq!(store.list_companies().len(), 1);

    backing.fail_writes(false);
    store.create_member(member("Ana Lima")).unwrap();
    assert_eq!(store.last_persist_error(), None);

    let reopened = DomainStore::open(
        JsonSnapshotRepository::new(backing),
        &clock,
        StoreOptions::default(),
    )
    .unwrap();
    assert_eq!(reopened.get_company(company.id).unwrap().name, "Construtora Alfa");
    assert_eq!(reopened.list_members().len(), 1);
}
