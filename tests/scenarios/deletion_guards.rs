//! Scenario: deletions refused while the books still need the entity
//!
//! Success Criteria:
//! - Companies and members with active referrals cannot be removed
//! - The last area cannot be removed
//! - A refused delete changes nothing

use resi::domain::value_objects::ReferralStatus;

use crate::common::*;

/// SCENARIO C: a company with an in-progress referral stays.
#[test]
fn scenario_company_with_active_referral_is_kept() {
    let clock = clock();
    let mut store = open_store(&clock);
    let company = store.create_company(company("Construtora Alfa", "15")).unwrap();
    let member = store.create_member(member("Ana Lima")).unwrap();
    let created = store
        .create_referral(referral(company.id, member.id, "1000"))
        .unwrap();
    store
        .transition_referral_status(created.id, ReferralStatus::InProgress)
        .unwrap();

    let before = store.snapshot().clone();
    assert!(!store.delete_company(company.id).unwrap());
    assert!(!store.delete_member(member.id).unwrap());
    assert_eq!(store.snapshot(), &before);
}

/// SCENARIO: once its referrals are closed, the company can go.
#[test]
fn scenario_company_removable_after_referrals_close() {
    let clock = clock();
    let mut store = open_store(&clock);
    let company = store.create_company(company("Construtora Alfa", "15")).unwrap();
    let member = store.create_member(member("Ana Lima")).unwrap();
    let won = store
        .create_referral(referral(company.id, member.id, "1000"))
        .unwrap();
    let lost = store
        .create_referral(referral(company.id, member.id, "400"))
        .unwrap();

    store
        .transition_referral_status(won.id, ReferralStatus::Completed)
        .unwrap();
    assert!(!store.delete_company(company.id).unwrap());

    store
        .transition_referral_status(lost.id, ReferralStatus::Cancelled)
        .unwrap();
    assert!(store.delete_company(company.id).unwrap());
    assert!(store.delete_member(member.id).unwrap());
    assert!(store.list_companies().is_empty());
    assert!(store.list_members().is_empty());
    // history stays
    assert_eq!(store.list_referrals().len(), 2);
}

/// SCENARIO: areas can be removed down to one, never zero.
#[test]
fn scenario_last_area_is_kept() {
    let clock = clock();
    let mut store = open_store(&clock);
    let ids: Vec<_> = store.list_areas().iter().map(|a| a.id).collect();

    for id in &ids[..ids.len() - 1] {
        assert!(store.delete_area(*id).unwrap());
    }
    let last = ids[ids.len() - 1];
    assert!(!store.delete_area(last).unwrap());
    assert_eq!(store.list_areas().len(), 1);
    assert_eq!(store.list_areas()[0].id, last);
}

/// SCENARIO: unknown ids are reported, not ignored.
#[test]
fn scenario_unknown_ids_are_not_found() {
    let clock = clock();
    let mut store = open_store(&clock);
    let company = store.create_company(company("Construtora Alfa", "15")).unwrap();
    let member = store.create_member(member("Ana Lima")).unwrap();
    let created = store
        .create_referral(referral(company.id, member.id, "1000"))
        .unwrap();

    let ghost = resi::domain::value_objects::CompanyId::new();
    assert!(store.delete_company(ghost).unwrap_err().is_not_found());
    assert!(store
        .create_referral(referral(ghost, member.id, "10"))
        .unwrap_err()
        .is_not_found());
    assert!(store
        .transition_referral_status(resi::domain::value_objects::ReferralId::new(), ReferralStatus::Completed)
        .unwrap_err()
        .is_not_found());
    assert_eq!(store.list_referrals().len(), 1);
    assert_eq!(store.list_referrals()[0].id, created.id);
}
