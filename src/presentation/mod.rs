//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the store with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Creates the store with proper dependencies (dependency injection)
//! - `output` - Tables, money formatting and JSON output
//! - `resolve` - Full or prefix id lookup for arguments
//!
//! ## Usage
//!
//! ```ignore
//! use resi::presentation::factory;
//!
//! let mut store = factory::create_store_from_config(&config, events)?;
//! let totals = store.commission_totals();
//! ```

pub mod cli;
pub mod factory;
pub mod output;
pub mod resolve;

pub use cli::Cli;
pub use factory::{create_event_sink, create_store, create_store_from_config, ConcreteStore};
pub use output::OutputFormat;
pub use resolve::resolve_id;
