//! Common test utilities for resi scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated CLI environment with temp data and home directories
//! - Fixtures: In-memory stores, drafts and money helpers

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
