//! Scenario: a referral from prospect to realized commission
//!
//! Journey: a partner company pays 15%, a member refers a 1000 deal,
//! the deal closes and the commission is shared across the five areas.
//!
//! Success Criteria:
//! - The commission is known (and pending) from the moment the referral exists
//! - Completion credits every area once, and only once
//! - Rollups and totals agree with the ledger

use resi::domain::value_objects::{Money, ReferralStatus};
use resi::InvariantViolation;
use resi::ResiError;

use crate::common::*;

/// SCENARIO A + B: creation prices the commission; completion realizes it.
#[test]
fn scenario_referral_completion_realizes_commission() {
    let clock = clock();
    let mut store = open_store(&clock);
    assert_eq!(store.list_areas().len(), 5);

    let company = store.create_company(company("Construtora Alfa", "15")).unwrap();
    let member = store.create_member(member("Ana Lima")).unwrap();
    let created = store
        .create_referral(referral(company.id, member.id, "1000"))
        .unwrap();

    // A: one pending commission of 150
    assert_eq!(store.list_commissions().len(), 1);
    let commission = store.get_commission(created.id).unwrap();
    assert_eq!(commission.total_amount, money("150"));
    assert!(!commission.is_realized());
    assert_eq!(commission.member_amount, money("75"));
    assert_eq!(commission.resi_amount, money("75"));

    // B: completing credits 30 to each of the five areas
    let outcome = store
        .transition_referral_status(created.id, ReferralStatus::Completed)
        .unwrap();
    assert!(outcome.realized());
    assert_eq!(outcome.distributions.len(), 5);

    for area in store.list_areas() {
        assert_eq!(area.balance, money("30"), "area {}", area.name);
    }
    let commission = store.get_commission(created.id).unwrap();
    assert!(commission.is_realized());
    assert!(commission.realized_at().is_some());

    let referral = store.get_referral(created.id).unwrap();
    assert!(referral.commission_calculated());
    assert_eq!(referral.status_history().len(), 2);
    assert_eq!(referral.status_history()[0].previous_status, None);
    assert_eq!(
        referral.status_history()[1].previous_status,
        Some(ReferralStatus::Prospect)
    );

    let totals = store.commission_totals();
    assert_eq!(totals.received, money("150"));
    assert_eq!(totals.pending, Money::zero());
    assert_eq!(totals.member_share + totals.resi_share, money("150"));
}

/// SCENARIO: completing again never credits the areas twice.
#[test]
fn scenario_second_completion_is_rejected_and_harmless() {
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
    store
        .transition_referral_status(created.id, ReferralStatus::Completed)
        .unwrap();

    let err = store
        .transition_referral_status(created.id, ReferralStatus::Completed)
        .unwrap_err();
    assert!(matches!(
        err,
        ResiError::InvariantViolation(InvariantViolation::TerminalStatus { .. })
    ));

    let credited: Money = store.list_areas().iter().map(|a| a.balance).sum();
    assert_eq!(credited, money("150"));
    assert_eq!(store.list_distributions().len(), 5);
    assert_eq!(store.get_referral(created.id).unwrap().status_history().len(), 3);
}

/// SCENARIO: under the permissive policy re-entering completed is recorded
/// but settles nothing.
#[test]
fn scenario_permissive_reentry_does_not_double_credit() {
    let clock = clock();
    let mut store = open_permissive(&clock);
    let company = store.create_company(company("Construtora Alfa", "15")).unwrap();
    let member = store.create_member(member("Ana Lima")).unwrap();
    let created = store
        .create_referral(referral(company.id, member.id, "1000"))
        .unwrap();

    for status in [
        ReferralStatus::Completed,
        ReferralStatus::InProgress,
        ReferralStatus::Completed,
        ReferralStatus::Completed,
    ] {
        store.transition_referral_status(created.id, status).unwrap();
    }

    let credited: Money = store.list_areas().iter().map(|a| a.balance).sum();
    assert_eq!(credited, money("150"));
    assert_eq!(store.get_referral(created.id).unwrap().status_history().len(), 5);
}

/// SCENARIO D: the member rollup splits each commission 50/50.
#[test]
fn scenario_member_rollup_uses_member_share() {
    let clock = clock();
    let mut store = open_store(&clock);
    let company = store.create_company(company("Construtora Alfa", "10")).unwrap();
    let member = store.create_member(member("Ana Lima")).unwrap();

    let done = store
        .create_referral(referral(company.id, member.id, "1000"))
        .unwrap();
    store
        .transition_referral_status(done.id, ReferralStatus::Completed)
        .unwrap();
    store
        .create_referral(referral(company.id, member.id, "2000"))
        .unwrap();

    let rollups = store.member_rollups();
    assert_eq!(rollups.len(), 1);
    let rollup = &rollups[0];
    assert_eq!(rollup.referrals, 2);
    assert_eq!(rollup.completed, 1);
    assert_eq!(rollup.total_commissions, money("300"));
    assert_eq!(rollup.total_received, money("50"));
    assert_eq!(rollup.total_pending, money("100"));

    let totals = store.commission_totals();
    assert_eq!(totals.pending, money("200"));
    assert_eq!(totals.pending_deals, 1);
    assert_eq!(totals.received, money("100"));
}

/// SCENARIO: a cancelled referral leaves the pending totals.
#[test]
fn scenario_cancelled_referral_is_not_pending() {
    let clock = clock();
    let mut store = open_store(&clock);
    let company = store.create_company(company("Construtora Alfa", "10")).unwrap();
    let member = store.create_member(member("Ana Lima")).unwrap();
    let created = store
        .create_referral(referral(company.id, member.id, "1000"))
        .unwrap();

    store
        .transition_referral_status(created.id, ReferralStatus::Cancelled)
        .unwrap();

    let totals = store.commission_totals();
    assert_eq!(totals.pending, Money::zero());
    assert_eq!(totals.pending_deals, 0);
    assert!(store.member_rollups()[0].total_pending.is_zero());
    assert!(store.list_areas().iter().all(|a| a.balance.is_zero()));
}

/// SCENARIO: the dashboard reflects a small pipeline.
#[test]
fn scenario_dashboard_summary() {
    let clock = clock();
    let mut store = open_store(&clock);
    let alfa = store.create_company(company("Construtora Alfa", "10")).unwrap();
    let beta = store.create_company(company("Beta Engenharia", "20")).unwrap();
    let ana = store.create_member(member("Ana Lima")).unwrap();
    let bruno = store.create_member(member("Bruno Reis")).unwrap();

    let first = store.create_referral(referral(alfa.id, ana.id, "1000")).unwrap();
    clock.advance(chrono::Duration::hours(1));
    store.create_referral(referral(beta.id, bruno.id, "500")).unwrap();
    clock.advance(chrono::Duration::hours(1));
    let last = store.create_referral(referral(beta.id, ana.id, "250")).unwrap();
    store
        .transition_referral_status(first.id, ReferralStatus::Completed)
        .unwrap();

    let summary = store.dashboard();
    assert_eq!(summary.companies, 2);
    assert_eq!(summary.members, 2);
    assert_eq!(summary.referrals, 3);
    assert_eq!(summary.completed_referrals, 1);
    assert_eq!(summary.total_commission_value, money("250"));
    assert_eq!(summary.commissions.received, money("100"));
    assert_eq!(summary.commissions.pending, money("150"));

    let recent = store.recent_referrals(2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].id, last.id);

    let board = store.pipeline_board();
    let counts: Vec<usize> = board.iter().map(|c| c.referrals.len()).collect();
    assert_eq!(counts, vec![2, 0, 1, 0]);

    let shares = store.area_shares();
    assert!(shares
        .iter()
        .all(|s| s.percentage == rust_decimal::Decimal::new(2000, 2)));
}
