//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod id;
mod money;
mod rate;
mod status;

pub use id::{
    AreaId, CommissionId, CompanyId, DistributionId, EntityKind, MemberId, ReferralId,
    StatusChangeId,
};
pub use money::{Money, MoneyParseError};
pub use rate::{CommissionRate, RateError};
pub use status::{ReferralStatus, UnknownStatus};
