//! Snapshot entity
//!
//! The complete state of the cooperative's books: every collection the
//! store owns, in insertion order. This is the unit that gets persisted
//! and restored.

use std::fmt;

use super::{Area, AreaDistribution, Commission, Company, Member, Referral};
use crate::domain::value_objects::{AreaId, CommissionId, CompanyId, MemberId, ReferralId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub companies: Vec<Company>,
    pub members: Vec<Member>,
    pub referrals: Vec<Referral>,
    pub commissions: Vec<Commission>,
    pub areas: Vec<Area>,
    pub distributions: Vec<AreaDistribution>,
}

/// A referential inconsistency found in a restored snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotIssue {
    ReferralWithoutCommission(ReferralId),
    OrphanCommission(CommissionId),
    DuplicateCommission(ReferralId),
    UnknownCompany { referral: ReferralId, company: CompanyId },
    UnknownMember { referral: ReferralId, member: MemberId },
    NoAreas,
}

impl fmt::Display for SnapshotIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotIssue::ReferralWithoutCommission(id) => {
                write!(f, "referral {} has no commission", id)
            }
            SnapshotIssue::OrphanCommission(id) => {
                write!(f, "commission {} points at a missing referral", id)
            }
            SnapshotIssue::DuplicateCommission(id) => {
                write!(f, "referral {} has more than one commission", id)
            }
            SnapshotIssue::UnknownCompany { referral, company } => {
                write!(f, "referral {} points at missing company {}", referral, company)
            }
            SnapshotIssue::UnknownMember { referral, member } => {
                write!(f, "referral {} points at missing member {}", referral, member)
            }
            SnapshotIssue::NoAreas => write!(f, "no areas defined"),
        }
    }
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn company(&self, id: CompanyId) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn area(&self, id: AreaId) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    pub fn referral(&self, id: ReferralId) -> Option<&Referral> {
        self.referrals.iter().find(|r| r.id == id)
    }

    pub fn commission_for(&self, referral: ReferralId) -> Option<&Commission> {
        self.commissions.iter().find(|c| c.referral_id == referral)
    }

    /// Check the cross-collection invariants a restored snapshot should hold.
    ///
    /// Referrals whose company has since been deleted are fine as long as
    /// they are no longer active; an active referral must resolve both its
    /// company and its member.
    pub fn verify(&self) -> Vec<SnapshotIssue> {
        let mut issues = Vec::new();

        if self.areas.is_empty() {
            issues.push(SnapshotIssue::NoAreas);
        }

        for referral in &self.referrals {
            match self
                .commissions
                .iter()
                .filter(|c| c.referral_id == referral.id)
                .count()
            {
                0 => issues.push(SnapshotIssue::ReferralWithoutCommission(referral.id)),
                1 => {}
                _ => issues.push(SnapshotIssue::DuplicateCommission(referral.id)),
            }

            if referral.is_active() {
                if self.company(referral.company_id).is_none() {
                    issues.push(SnapshotIssue::UnknownCompany {
                        referral: referral.id,
                        company: referral.company_id,
                    });
                }
                if self.member(referral.member_id).is_none() {
                    issues.push(SnapshotIssue::UnknownMember {
                        referral: referral.id,
                        member: referral.member_id,
                    });
                }
            }
        }

        for commission in &self.commissions {
            if self.referral(commission.referral_id).is_none() {
                issues.push(SnapshotIssue::OrphanCommission(commission.id));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::entities::{NewArea, NewReferral};
    use crate::domain::value_objects::Money;

    fn referral(snapshot: &Snapshot) -> Referral {
        Referral::open(
            NewReferral {
                company_id: snapshot.companies.first().map(|c| c.id).unwrap_or_default(),
                member_id: MemberId::new(),
                client_name: "Restaurante XYZ".to_string(),
                service: "Solar Panel Installation".to_string(),
                value: Money::from_cents(1_800_000),
            },
            Utc::now(),
        )
    }

    #[test]
    fn empty_snapshot_reports_missing_areas() {
        assert_eq!(Snapshot::new().verify(), vec![SnapshotIssue::NoAreas]);
    }

    #[test]
    fn verify_flags_referral_without_commission_and_dangling_refs() {
        let mut snapshot = Snapshot::new();
        snapshot.areas.push(Area::create(NewArea::new("Gestão", "Gestão")));
        let referral = referral(&snapshot);
        let id = referral.id;
        snapshot.referrals.push(referral);

        let issues = snapshot.verify();
        assert!(issues.contains(&SnapshotIssue::ReferralWithoutCommission(id)));
        assert!(issues
            .iter()
            .any(|i| matches!(i, SnapshotIssue::UnknownCompany { referral, .. } if *referral == id)));
        assert!(issues
            .iter()
            .any(|i| matches!(i, SnapshotIssue::UnknownMember { referral, .. } if *referral == id)));
    }

    #[test]
    fn verify_flags_orphan_commission() {
        let mut snapshot = Snapshot::new();
        snapshot.areas.push(Area::create(NewArea::new("Gestão", "Gestão")));
        let orphan = Commission::pending(
            ReferralId::new(),
            Money::from_cents(100),
            Money::from_cents(50),
            Money::from_cents(50),
            Utc::now(),
        );
        let orphan_id = orphan.id;
        snapshot.commissions.push(orphan);

        assert_eq!(snapshot.verify(), vec![SnapshotIssue::OrphanCommission(orphan_id)]);
    }

    #[test]
    fn issue_display_mentions_ids() {
        let id = ReferralId::new();
        let text = SnapshotIssue::ReferralWithoutCommission(id).to_string();
        assert!(text.contains(&id.to_string()));
    }
}
