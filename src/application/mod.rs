//! Application Layer
//!
//! Orchestrates the business flow on top of the domain.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Components
//!
//! - `DomainStore` - Owns the snapshot; runs every command and query
//! - `seed` - The dataset a fresh store starts from

pub mod seed;
pub mod store;

pub use seed::default_areas;
pub use store::{DomainStore, OpenOrigin, StoreOptions};
