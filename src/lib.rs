//! resi - referral and commission books for a cooperative
//!
//! Members refer clients to partner companies. Each referral moves
//! through a status pipeline; completing one realizes its commission,
//! which is split between the member and the cooperative and shared out
//! across the cooperative's areas (funds).
//!
//! The `DomainStore` owns all entities and is the only way to change
//! them. Everything is saved as JSON collections in a data directory.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DomainStore, OpenOrigin, StoreOptions};
pub use config::Config;
pub use domain::entities::{
    Area, AreaDistribution, Commission, Company, Member, NewArea, NewCompany, NewMember,
    NewReferral, Referral, Snapshot, StatusChange,
};
pub use domain::policies::TransitionPolicy;
pub use domain::value_objects::{CommissionRate, Money, ReferralStatus};
pub use domain::InvariantViolation;
pub use error::{ResiError, ResiResult};
