//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod lifecycle;
pub mod reporting;
pub mod settlement;

pub use lifecycle::{open_referral, transition, OpenError, TransitionOutcome};
pub use reporting::{
    area_shares, commission_totals, dashboard, member_rollups, pipeline_board, recent_referrals,
    AreaShare, BoardColumn, CommissionTotals, DashboardSummary, MemberRollup, ReferralFilter,
};
pub use settlement::{calculate_pending, quote, realize, CommissionQuote};
