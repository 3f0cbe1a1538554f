//! Invariant violations
//!
//! Commands that would break a lifecycle or settlement invariant are
//! rejected with one of these instead of being applied.

use crate::domain::value_objects::{AreaId, CommissionId, ReferralId, ReferralStatus};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// Completed and cancelled referrals cannot move any more
    #[error("referral is {status}, a terminal status; it cannot move to {requested}")]
    TerminalStatus {
        status: ReferralStatus,
        requested: ReferralStatus,
    },

    #[error("referral is already {status}")]
    UnchangedStatus { status: ReferralStatus },

    #[error("referral {referral} has no commission to realize")]
    CommissionMissing { referral: ReferralId },

    #[error("commission {commission} was already realized")]
    CommissionAlreadyRealized { commission: CommissionId },

    #[error("at least one area must exist to receive a distribution")]
    NoAreas,

    #[error("crediting area {area} would overflow its balance")]
    BalanceOverflow { area: AreaId },
}
