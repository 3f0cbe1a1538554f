//! Store commands
//!
//! Every command validates first and mutates second, so a rejected
//! command leaves the snapshot exactly as it was.

use tracing::{info, warn};

use super::DomainStore;
use crate::domain::entities::{
    Area, Company, Member, NewArea, NewCompany, NewMember, NewReferral, Referral,
};
use crate::domain::policies::{
    area_deletion_block, company_deletion_block, member_deletion_block, DeletionBlock,
};
use crate::domain::ports::{Clock, SnapshotRepository, StoreEvent};
use crate::domain::services::{open_referral, transition, OpenError, TransitionOutcome};
use crate::domain::value_objects::{
    AreaId, CompanyId, EntityKind, MemberId, Money, ReferralId, ReferralStatus,
};
use crate::error::{ResiError, ResiResult};

impl<R, C> DomainStore<R, C>
where
    R: SnapshotRepository,
    C: Clock,
{
    fn blocked(&self, kind: EntityKind, id: impl ToString, block: DeletionBlock) -> ResiResult<bool> {
        let id = id.to_string();
        warn!(%kind, %id, reason = %block, "deletion blocked");
        self.emit(StoreEvent::DeletionBlocked {
            kind: kind.to_string(),
            id,
            reason: block.to_string(),
        });
        Ok(false)
    }

    // Companies

    pub fn create_company(&mut self, draft: NewCompany) -> ResiResult<Company> {
        draft.validate()?;
        let company = Company::create(draft, self.clock.now());
        info!(id = %company.id, name = %company.name, rate = %company.commission_percentage, "company created");

        self.snapshot.companies.push(company.clone());
        self.emit(StoreEvent::CompanyCreated { id: company.id });
        self.persist();
        Ok(company)
    }

    /// Replace a company's details.
    ///
    /// The name is fixed at creation and `created_at` is kept from the
    /// stored record.
    pub fn update_company(&mut self, company: Company) -> ResiResult<()> {
        company.validate()?;
        let id = company.id;
        let slot = self
            .snapshot
            .companies
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ResiError::not_found(EntityKind::Company, id))?;

        if company.name.trim() != slot.name {
            return Err(ResiError::invalid(
                "name",
                "company name cannot change after creation",
            ));
        }

        *slot = Company {
            name: slot.name.clone(),
            responsible_person: company.responsible_person.trim().to_string(),
            contact_info: company.contact_info.trim().to_string(),
            created_at: slot.created_at,
            ..company
        };
        info!(%id, "company updated");

        self.emit(StoreEvent::CompanyUpdated { id });
        self.persist();
        Ok(())
    }

    /// Delete a company; `Ok(false)` while it has active referrals
    pub fn delete_company(&mut self, id: CompanyId) -> ResiResult<bool> {
        if self.snapshot.company(id).is_none() {
            return Err(ResiError::not_found(EntityKind::Company, id));
        }
        if let Some(block) = company_deletion_block(id, &self.snapshot.referrals) {
            return self.blocked(EntityKind::Company, id, block);
        }

        self.snapshot.companies.retain(|c| c.id != id);
        info!(%id, "company deleted");
        self.emit(StoreEvent::CompanyDeleted { id });
        self.persist();
        Ok(true)
    }

    // Members

    pub fn create_member(&mut self, draft: NewMember) -> ResiResult<Member> {
        draft.validate()?;
        let member = Member::create(draft, self.clock.now());
        info!(id = %member.id, name = %member.name, "member created");

        self.snapshot.members.push(member.clone());
        self.emit(StoreEvent::MemberCreated { id: member.id });
        self.persist();
        Ok(member)
    }

    pub fn update_member(&mut self, member: Member) -> ResiResult<()> {
        member.validate()?;
        let id = member.id;
        let slot = self
            .snapshot
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| ResiError::not_found(EntityKind::Member, id))?;

        *slot = Member {
            name: member.name.trim().to_string(),
            email: member.email.trim().to_string(),
            phone: member.phone.trim().to_string(),
            created_at: slot.created_at,
            ..member
        };
        info!(%id, "member updated");

        self.emit(StoreEvent::MemberUpdated { id });
        self.persist();
        Ok(())
    }

    /// Delete a member; `Ok(false)` while they have active referrals
    pub fn delete_member(&mut self, id: MemberId) -> ResiResult<bool> {
        if self.snapshot.member(id).is_none() {
            return Err(ResiError::not_found(EntityKind::Member, id));
        }
        if let Some(block) = member_deletion_block(id, &self.snapshot.referrals) {
            return self.blocked(EntityKind::Member, id, block);
        }

        self.snapshot.members.retain(|m| m.id != id);
        info!(%id, "member deleted");
        self.emit(StoreEvent::MemberDeleted { id });
        self.persist();
        Ok(true)
    }

    // Areas

    pub fn create_area(&mut self, draft: NewArea) -> ResiResult<Area> {
        draft.validate()?;
        let area = Area::create(draft);
        info!(id = %area.id, name = %area.name, "area created");

        self.snapshot.areas.push(area.clone());
        self.emit(StoreEvent::AreaCreated { id: area.id });
        self.persist();
        Ok(area)
    }

    /// Rename or redescribe an area; the balance is only ever moved by settlement
    pub fn update_area(&mut self, area: Area) -> ResiResult<()> {
        area.validate()?;
        let slot = self
            .snapshot
            .areas
            .iter_mut()
            .find(|a| a.id == area.id)
            .ok_or_else(|| ResiError::not_found(EntityKind::Area, area.id))?;

        slot.name = area.name.trim().to_string();
        slot.description = area.description.trim().to_string();
        info!(id = %area.id, "area updated");

        self.emit(StoreEvent::AreaUpdated { id: area.id });
        self.persist();
        Ok(())
    }

    /// Delete an area; `Ok(false)` if it is the last one
    pub fn delete_area(&mut self, id: AreaId) -> ResiResult<bool> {
        if self.snapshot.area(id).is_none() {
            return Err(ResiError::not_found(EntityKind::Area, id));
        }
        if let Some(block) = area_deletion_block(&self.snapshot.areas) {
            return self.blocked(EntityKind::Area, id, block);
        }

        self.snapshot.areas.retain(|a| a.id != id);
        info!(%id, "area deleted");
        self.emit(StoreEvent::AreaDeleted { id });
        self.persist();
        Ok(true)
    }

    // Referrals

    /// Register a referral in `prospect` together with its pending commission.
    ///
    /// Both the company and the member must exist; otherwise nothing is
    /// created.
    pub fn create_referral(&mut self, draft: NewReferral) -> ResiResult<Referral> {
        draft.validate()?;
        let company = self
            .snapshot
            .company(draft.company_id)
            .ok_or_else(|| ResiError::not_found(EntityKind::Company, draft.company_id))?;
        if self.snapshot.member(draft.member_id).is_none() {
            return Err(ResiError::not_found(EntityKind::Member, draft.member_id));
        }

        let (referral, commission) =
            open_referral(draft, company, self.clock.now()).map_err(|err| match err {
                OpenError::CommissionOverflow => {
                    ResiError::invalid("value", "too large to compute a commission")
                }
                OpenError::CompanyMismatch => ResiError::invalid("companyId", "does not match company"),
            })?;

        info!(
            id = %referral.id,
            company = %referral.company_id,
            member = %referral.member_id,
            value = %referral.value,
            commission = %commission.total_amount,
            "referral created"
        );

        self.emit(StoreEvent::ReferralCreated {
            id: referral.id,
            commission: commission.id,
            total: commission.total_amount,
        });
        self.snapshot.commissions.push(commission);
        self.snapshot.referrals.push(referral.clone());
        self.persist();
        Ok(referral)
    }

    /// Move a referral to `new_status`, realizing its commission on completion.
    ///
    /// Transitions the policy refuses, and completions that cannot be
    /// settled, are rejected with `InvariantViolation` and change nothing.
    pub fn transition_referral_status(
        &mut self,
        id: ReferralId,
        new_status: ReferralStatus,
    ) -> ResiResult<TransitionOutcome> {
        let now = self.clock.now();
        let policy = self.policy;
        let snapshot = &mut self.snapshot;

        let referral = snapshot
            .referrals
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ResiError::not_found(EntityKind::Referral, id))?;
        let from = referral.status();
        let commission = snapshot.commissions.iter_mut().find(|c| c.referral_id == id);

        let outcome = match transition(
            referral,
            commission,
            &mut snapshot.areas,
            new_status,
            policy,
            now,
        ) {
            Ok(outcome) => outcome,
            Err(violation) => {
                warn!(%id, %from, to = %new_status, %violation, "transition rejected");
                return Err(violation.into());
            }
        };
        snapshot.distributions.extend(outcome.distributions.iter().cloned());

        info!(%id, %from, to = %new_status, "referral status changed");
        self.emit(StoreEvent::StatusChanged {
            referral: id,
            from,
            to: new_status,
        });

        if let Some(first) = outcome.distributions.first() {
            let total: Money = outcome.distributions.iter().map(|d| d.amount).sum();
            info!(
                commission = %first.commission_id,
                %total,
                areas = outcome.distributions.len(),
                "commission realized"
            );
            self.emit(StoreEvent::CommissionRealized {
                commission: first.commission_id,
                total,
                areas: outcome.distributions.len(),
            });
        }

        self.persist();
        Ok(outcome)
    }
}
