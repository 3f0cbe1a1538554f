//! Test fixtures - in-memory stores and entity drafts.

use chrono::{DateTime, TimeZone, Utc};

use resi::application::{DomainStore, StoreOptions};
use resi::domain::entities::{NewCompany, NewMember, NewReferral};
use resi::domain::policies::TransitionPolicy;
use resi::domain::value_objects::{CompanyId, MemberId, Money};
use resi::infrastructure::{JsonSnapshotRepository, ManualClock, MemoryCollectionStore};

/// Store over in-memory collections, driven by a manual clock
pub type MemoryStore<'c> = DomainStore<JsonSnapshotRepository<MemoryCollectionStore>, &'c ManualClock>;

/// Fixed starting instant so timestamps are predictable
pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
}

pub fn clock() -> ManualClock {
    ManualClock::new(start())
}

/// Fresh store seeded with the five default areas (strict policy)
pub fn open_store(clock: &ManualClock) -> MemoryStore<'_> {
    open_store_with(clock, StoreOptions::default())
}

pub fn open_permissive(clock: &ManualClock) -> MemoryStore<'_> {
    open_store_with(
        clock,
        StoreOptions {
            policy: TransitionPolicy::Permissive,
            ..StoreOptions::default()
        },
    )
}

pub fn open_store_with(clock: &ManualClock, options: StoreOptions) -> MemoryStore<'_> {
    let repo = JsonSnapshotRepository::new(MemoryCollectionStore::new());
    DomainStore::open(repo, clock, options).unwrap()
}

pub fn money(amount: &str) -> Money {
    amount.parse().unwrap()
}

pub fn company(name: &str, rate: &str) -> NewCompany {
    NewCompany {
        name: name.to_string(),
        responsible_person: "Carla Souza".to_string(),
        contact_info: "carla@parceira.com.br".to_string(),
        commission_percentage: rate.parse().unwrap(),
    }
}

pub fn member(name: &str) -> NewMember {
    NewMember {
        name: name.to_string(),
        email: format!("{}@coop.org", name.to_lowercase().replace(' ', ".")),
        phone: "(11) 98888-0000".to_string(),
    }
}

pub fn referral(company: CompanyId, member: MemberId, value: &str) -> NewReferral {
    NewReferral {
        company_id: company,
        member_id: member,
        client_name: "Padaria Central".to_string(),
        service: "Consultoria".to_string(),
        value: money(value),
    }
}
