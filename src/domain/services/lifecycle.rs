//! Referral lifecycle
//!
//! Opening referrals together with their commission, and moving them
//! through the status pipeline. Completing a referral settles its
//! commission into the area ledger in the same step.

use chrono::{DateTime, Utc};

use super::settlement;
use crate::domain::entities::{
    Area, AreaDistribution, Commission, Company, NewReferral, Referral, StatusChange,
};
use crate::domain::invariant::InvariantViolation;
use crate::domain::policies::TransitionPolicy;
use crate::domain::value_objects::ReferralStatus;

/// Why a referral could not be opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    /// The draft references a different company than the one given
    CompanyMismatch,
    /// `value × rate` does not fit a decimal
    CommissionOverflow,
}

/// Open `draft` against `company`, yielding the referral and its pending commission
pub fn open_referral(
    draft: NewReferral,
    company: &Company,
    now: DateTime<Utc>,
) -> Result<(Referral, Commission), OpenError> {
    if draft.company_id != company.id {
        return Err(OpenError::CompanyMismatch);
    }
    let referral = Referral::open(draft, now);
    let commission = settlement::calculate_pending(&referral, company, now)
        .ok_or(OpenError::CommissionOverflow)?;
    Ok((referral, commission))
}

/// What a successful transition did
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionOutcome {
    pub change: StatusChange,
    /// Areas credited by this transition; empty unless it realized the commission
    pub distributions: Vec<AreaDistribution>,
}

impl TransitionOutcome {
    pub fn realized(&self) -> bool {
        !self.distributions.is_empty()
    }
}

/// Move `referral` to `new_status`.
///
/// The policy is checked first; a rejected transition leaves every
/// argument untouched. Reaching `completed` realizes the commission
/// unless it was already realized, in which case only the history
/// grows. A completion that cannot be settled (no commission, or no
/// areas) is rejected before anything is recorded.
pub fn transition(
    referral: &mut Referral,
    commission: Option<&mut Commission>,
    areas: &mut [Area],
    new_status: ReferralStatus,
    policy: TransitionPolicy,
    now: DateTime<Utc>,
) -> Result<TransitionOutcome, InvariantViolation> {
    policy.check(referral.status(), new_status)?;

    let distributions = if new_status == ReferralStatus::Completed {
        let commission = commission.ok_or(InvariantViolation::CommissionMissing {
            referral: referral.id,
        })?;
        if commission.is_realized() {
            Vec::new()
        } else {
            settlement::realize(commission, areas, now)?
        }
    } else {
        Vec::new()
    };

    let change = referral.record_status(new_status, now).clone();
    Ok(TransitionOutcome {
        change,
        distributions,
    })
}
