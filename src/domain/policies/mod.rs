//! Domain Policies
//!
//! Business rules that govern which commands are accepted.
//! These are pure functions that operate on domain entities.

mod deletion_policy;
mod status_policy;

pub use deletion_policy::{
    area_deletion_block, company_deletion_block, member_deletion_block, DeletionBlock,
};
pub use status_policy::TransitionPolicy;
