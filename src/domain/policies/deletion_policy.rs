//! Deletion guards
//!
//! Companies and members stay while any referral pointing at them is
//! still active; the last remaining area always stays.

use std::fmt;

use crate::domain::entities::{Area, Referral};
use crate::domain::value_objects::{CompanyId, MemberId};

/// Why a delete was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionBlock {
    ActiveReferrals { count: usize },
    LastArea,
}

impl fmt::Display for DeletionBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletionBlock::ActiveReferrals { count: 1 } => write!(f, "1 active referral"),
            DeletionBlock::ActiveReferrals { count } => write!(f, "{} active referrals", count),
            DeletionBlock::LastArea => write!(f, "it is the last remaining area"),
        }
    }
}

fn active_count(referrals: &[Referral], matches: impl Fn(&Referral) -> bool) -> Option<DeletionBlock> {
    let count = referrals
        .iter()
        .filter(|r| r.is_active() && matches(r))
        .count();
    (count > 0).then_some(DeletionBlock::ActiveReferrals { count })
}

pub fn company_deletion_block(company: CompanyId, referrals: &[Referral]) -> Option<DeletionBlock> {
    active_count(referrals, |r| r.company_id == company)
}

pub fn member_deletion_block(member: MemberId, referrals: &[Referral]) -> Option<DeletionBlock> {
    active_count(referrals, |r| r.member_id == member)
}

pub fn area_deletion_block(areas: &[Area]) -> Option<DeletionBlock> {
    (areas.len() <= 1).then_some(DeletionBlock::LastArea)
}
