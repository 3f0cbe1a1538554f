//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Company` - A partner paying commission on closed referrals
//! - `Member` - A cooperative member who refers clients
//! - `Area` - A shared fund receiving realized commissions
//! - `Referral` - A deal moving through the status pipeline
//! - `Commission` - The fee owed for a referral
//! - `Snapshot` - All of the above, as one persistable unit

mod area;
mod commission;
mod company;
mod member;
mod referral;
mod snapshot;
mod validation;

pub use area::{Area, NewArea};
pub use commission::{AreaDistribution, Commission};
pub use company::{Company, NewCompany};
pub use member::{Member, NewMember};
pub use referral::{NewReferral, Referral, StatusChange};
pub use snapshot::{Snapshot, SnapshotIssue};
pub use validation::InvalidField;
