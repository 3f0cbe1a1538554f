//! Reporting
//!
//! Read-only derivations over a snapshot: commission totals, per-member
//! rollups, area shares, the dashboard summary and referral views.
//! Nothing here is cached; every call recomputes from the collections.

use std::cmp::Reverse;
use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::{Area, Commission, Member, Referral, Snapshot};
use crate::domain::value_objects::{CompanyId, MemberId, Money, ReferralStatus};

/// Pending and received commission value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommissionTotals {
    pub pending: Money,
    pub received: Money,
    pub pending_deals: usize,
    /// Member half of `received`
    pub member_share: Money,
    /// Cooperative half of `received`
    pub resi_share: Money,
}

fn owner<'a>(snapshot: &'a Snapshot, commission: &Commission) -> Option<&'a Referral> {
    snapshot.referral(commission.referral_id)
}

fn is_pending(snapshot: &Snapshot, commission: &Commission) -> bool {
    !commission.is_realized()
        && owner(snapshot, commission).is_some_and(|r| r.status() != ReferralStatus::Cancelled)
}

/// Totals over every commission in the snapshot.
///
/// Pending excludes commissions whose referral was cancelled.
pub fn commission_totals(snapshot: &Snapshot) -> CommissionTotals {
    let mut totals = CommissionTotals::default();
    for commission in &snapshot.commissions {
        if commission.is_realized() {
            totals.received += commission.total_amount;
            totals.member_share += commission.member_amount;
            totals.resi_share += commission.resi_amount;
        } else if is_pending(snapshot, commission) {
            totals.pending += commission.total_amount;
            totals.pending_deals += 1;
        }
    }
    totals
}

/// One member's commission figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRollup {
    pub member_id: MemberId,
    pub member_name: String,
    pub referrals: usize,
    pub completed: usize,
    pub total_commissions: Money,
    pub total_received: Money,
    pub total_pending: Money,
}

impl MemberRollup {
    fn empty(member: &Member) -> Self {
        Self {
            member_id: member.id,
            member_name: member.name.clone(),
            referrals: 0,
            completed: 0,
            total_commissions: Money::zero(),
            total_received: Money::zero(),
            total_pending: Money::zero(),
        }
    }
}

/// Commission figures per member, largest total first (ties by name).
///
/// Received and pending are the member's share of each commission;
/// the total is the full commission value of their referrals.
pub fn member_rollups(snapshot: &Snapshot) -> Vec<MemberRollup> {
    let mut rollups: Vec<MemberRollup> = snapshot.members.iter().map(MemberRollup::empty).collect();
    let index: HashMap<MemberId, usize> = rollups
        .iter()
        .enumerate()
        .map(|(i, r)| (r.member_id, i))
        .collect();

    for referral in &snapshot.referrals {
        let Some(&slot) = index.get(&referral.member_id) else {
            continue;
        };
        let rollup = &mut rollups[slot];
        rollup.referrals += 1;
        if referral.status() == ReferralStatus::Completed {
            rollup.completed += 1;
        }

        let Some(commission) = snapshot.commission_for(referral.id) else {
            continue;
        };
        rollup.total_commissions += commission.total_amount;
        if commission.is_realized() {
            rollup.total_received += commission.member_amount;
        } else if referral.status() != ReferralStatus::Cancelled {
            rollup.total_pending += commission.member_amount;
        }
    }

    rollups.sort_by(|a, b| {
        b.total_commissions
            .cmp(&a.total_commissions)
            .then_with(|| a.member_name.cmp(&b.member_name))
    });
    rollups
}

/// An area's slice of all distributed funds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaShare<'a> {
    pub area: &'a Area,
    /// Percentage of the sum of all balances, two decimals
    pub percentage: Decimal,
}

pub fn area_shares(areas: &[Area]) -> Vec<AreaShare<'_>> {
    let total: Money = areas.iter().map(|a| a.balance).sum();
    areas
        .iter()
        .map(|area| AreaShare {
            area,
            percentage: area.balance.percentage_of(total),
        })
        .collect()
}

/// Headline figures for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub companies: usize,
    pub members: usize,
    pub referrals: usize,
    pub completed_referrals: usize,
    /// Sum of every commission's total, realized or not
    pub total_commission_value: Money,
    pub commissions: CommissionTotals,
}

pub fn dashboard(snapshot: &Snapshot) -> DashboardSummary {
    DashboardSummary {
        companies: snapshot.companies.len(),
        members: snapshot.members.len(),
        referrals: snapshot.referrals.len(),
        completed_referrals: snapshot
            .referrals
            .iter()
            .filter(|r| r.status() == ReferralStatus::Completed)
            .count(),
        total_commission_value: snapshot.commissions.iter().map(|c| c.total_amount).sum(),
        commissions: commission_totals(snapshot),
    }
}

/// The `limit` most recently created referrals, newest first
pub fn recent_referrals(referrals: &[Referral], limit: usize) -> Vec<&Referral> {
    let mut recent: Vec<&Referral> = referrals.iter().collect();
    recent.sort_by_key(|r| Reverse(r.created_at));
    recent.truncate(limit);
    recent
}

/// Conjunctive referral filter; unset fields match everything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReferralFilter {
    pub company: Option<CompanyId>,
    pub member: Option<MemberId>,
    pub status: Option<ReferralStatus>,
}

impl ReferralFilter {
    pub fn matches(&self, referral: &Referral) -> bool {
        self.company.map_or(true, |c| referral.company_id == c)
            && self.member.map_or(true, |m| referral.member_id == m)
            && self.status.map_or(true, |s| referral.status() == s)
    }

    pub fn apply<'a>(&self, referrals: &'a [Referral]) -> Vec<&'a Referral> {
        referrals.iter().filter(|r| self.matches(r)).collect()
    }
}

/// One column of the pipeline board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn<'a> {
    pub status: ReferralStatus,
    pub referrals: Vec<&'a Referral>,
}

/// Referrals grouped by status, in pipeline order
pub fn pipeline_board(referrals: &[Referral]) -> Vec<BoardColumn<'_>> {
    ReferralStatus::ALL
        .into_iter()
        .map(|status| BoardColumn {
            status,
            referrals: referrals.iter().filter(|r| r.status() == status).collect(),
        })
        .collect()
}
