//! Domain Layer
//!
//! The core of resi - referral lifecycle and commission settlement
//! without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Company, Member, Area, Referral, Commission)
//! - `value_objects/` - Immutable value types (Money, CommissionRate, ReferralStatus, ids)
//! - `services/` - Domain services (lifecycle, settlement, reporting)
//! - `policies/` - Business rules (TransitionPolicy, deletion guards)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod invariant;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use invariant::InvariantViolation;
