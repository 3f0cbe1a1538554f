//! Scenario tests for resi.
//!
//! Scenarios run complete bookkeeping journeys through the `DomainStore`,
//! the same way the CLI drives it.
//!
//! Run with: cargo test --test scenarios

mod common;

#[path = "scenarios/commission_lifecycle.rs"]
mod commission_lifecycle;

#[path = "scenarios/deletion_guards.rs"]
mod deletion_guards;

#[path = "scenarios/reopen.rs"]
mod reopen;
