//! Store queries
//!
//! Lookups and derived views. None of these mutate or persist.

use tracing::debug;

use super::DomainStore;
use crate::domain::entities::{Area, AreaDistribution, Commission, Company, Member, Referral};
use crate::domain::ports::{Clock, SnapshotRepository};
use crate::domain::services::{
    self, AreaShare, BoardColumn, CommissionTotals, DashboardSummary, MemberRollup, ReferralFilter,
};
use crate::domain::value_objects::{
    AreaId, CompanyId, EntityKind, MemberId, ReferralId, ReferralStatus,
};
use crate::error::{ResiError, ResiResult};

impl<R, C> DomainStore<R, C>
where
    R: SnapshotRepository,
    C: Clock,
{
    pub fn get_company(&self, id: CompanyId) -> ResiResult<&Company> {
        self.snapshot
            .company(id)
            .ok_or_else(|| ResiError::not_found(EntityKind::Company, id))
    }

    pub fn get_member(&self, id: MemberId) -> ResiResult<&Member> {
        self.snapshot
            .member(id)
            .ok_or_else(|| ResiError::not_found(EntityKind::Member, id))
    }

    pub fn get_area(&self, id: AreaId) -> ResiResult<&Area> {
        self.snapshot
            .area(id)
            .ok_or_else(|| ResiError::not_found(EntityKind::Area, id))
    }

    pub fn get_referral(&self, id: ReferralId) -> ResiResult<&Referral> {
        self.snapshot
            .referral(id)
            .ok_or_else(|| ResiError::not_found(EntityKind::Referral, id))
    }

    /// The commission owned by a referral
    pub fn get_commission(&self, referral: ReferralId) -> ResiResult<&Commission> {
        self.snapshot
            .commission_for(referral)
            .ok_or_else(|| ResiError::not_found(EntityKind::Commission, referral))
    }

    pub fn list_companies(&self) -> &[Company] {
        &self.snapshot.companies
    }

    pub fn list_members(&self) -> &[Member] {
        &self.snapshot.members
    }

    pub fn list_referrals(&self) -> &[Referral] {
        &self.snapshot.referrals
    }

    pub fn list_commissions(&self) -> &[Commission] {
        &self.snapshot.commissions
    }

    pub fn list_areas(&self) -> &[Area] {
        &self.snapshot.areas
    }

    pub fn list_distributions(&self) -> &[AreaDistribution] {
        &self.snapshot.distributions
    }

    pub fn filter_referrals(&self, filter: &ReferralFilter) -> Vec<&Referral> {
        filter.apply(&self.snapshot.referrals)
    }

    /// Statuses the referral may move to under the current policy
    pub fn allowed_transitions(&self, id: ReferralId) -> ResiResult<Vec<ReferralStatus>> {
        let referral = self.get_referral(id)?;
        Ok(self.policy.allowed_from(referral.status()))
    }

    pub fn commission_totals(&self) -> CommissionTotals {
        let totals = services::commission_totals(&self.snapshot);
        debug!(pending = %totals.pending, received = %totals.received, "commission totals");
        totals
    }

    pub fn member_rollups(&self) -> Vec<MemberRollup> {
        services::member_rollups(&self.snapshot)
    }

    pub fn area_shares(&self) -> Vec<AreaShare<'_>> {
        services::area_shares(&self.snapshot.areas)
    }

    pub fn dashboard(&self) -> DashboardSummary {
        services::dashboard(&self.snapshot)
    }

    pub fn recent_referrals(&self, limit: usize) -> Vec<&Referral> {
        services::recent_referrals(&self.snapshot.referrals, limit)
    }

    pub fn pipeline_board(&self) -> Vec<BoardColumn<'_>> {
        services::pipeline_board(&self.snapshot.referrals)
    }
}
