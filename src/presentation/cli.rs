//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config, --data-dir, --events) are inherited by all subcommands
//! - Entity ids may be given in full or as a unique prefix

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::{CommissionRate, Money, ReferralStatus};

/// resi - referral and commission books for a cooperative
#[derive(Parser, Debug)]
#[command(name = "resi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print one JSON document instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./resi.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Data directory holding the collections
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Append store events as NDJSON to this file ("-" for stderr)
    #[arg(long, global = true, value_name = "PATH")]
    pub events: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage partner companies
    Company {
        #[command(subcommand)]
        action: CompanyCommand,
    },

    /// Manage cooperative members
    Member {
        #[command(subcommand)]
        action: MemberCommand,
    },

    /// Manage areas (funds)
    Area {
        #[command(subcommand)]
        action: AreaCommand,
    },

    /// Register and move referrals through the pipeline
    Referral {
        #[command(subcommand)]
        action: ReferralCommand,
    },

    /// Inspect commissions
    Commission {
        #[command(subcommand)]
        action: CommissionCommand,
    },

    /// Totals, recent referrals and area balances
    Dashboard,
}

#[derive(Subcommand, Debug)]
pub enum CompanyCommand {
    /// Register a company
    Add {
        #[arg(long)]
        name: String,

        /// Person responsible for the partnership
        #[arg(long)]
        responsible: String,

        /// Phone or email
        #[arg(long)]
        contact: String,

        /// Commission percentage (1-100)
        #[arg(long)]
        rate: CommissionRate,
    },

    /// Change a company's details (the name is fixed)
    Edit {
        id: String,

        #[arg(long)]
        responsible: Option<String>,

        #[arg(long)]
        contact: Option<String>,

        #[arg(long)]
        rate: Option<CommissionRate>,
    },

    /// Delete a company without active referrals
    Remove { id: String },

    /// List companies
    List,

    /// Show one company
    Show { id: String },
}

#[derive(Subcommand, Debug)]
pub enum MemberCommand {
    /// Register a member
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,
    },

    /// Change a member's details
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete a member without active referrals
    Remove { id: String },

    /// List members
    List,

    /// Show one member with their commission rollup
    Show { id: String },
}

#[derive(Subcommand, Debug)]
pub enum AreaCommand {
    /// Create an area
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,
    },

    /// Rename or redescribe an area
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an area (at least one must remain)
    Remove { id: String },

    /// List areas with balances and their share of the total
    List,
}

#[derive(Subcommand, Debug)]
pub enum ReferralCommand {
    /// Register a referral in the prospect stage
    Add {
        #[arg(long)]
        company: String,

        #[arg(long)]
        member: String,

        /// Client name
        #[arg(long)]
        client: String,

        #[arg(long)]
        service: String,

        /// Deal value
        #[arg(long)]
        value: Money,
    },

    /// Move a referral to another status
    Move {
        id: String,

        /// prospect, in-progress, completed or cancelled
        status: ReferralStatus,
    },

    /// List referrals, optionally filtered
    List {
        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        member: Option<String>,

        #[arg(long)]
        status: Option<ReferralStatus>,
    },

    /// Show a referral with its history and commission
    Show { id: String },

    /// Referrals grouped by status
    Board,
}

#[derive(Subcommand, Debug)]
pub enum CommissionCommand {
    /// List commissions and totals
    List {
        /// Roll commissions up per member instead
        #[arg(long)]
        by_member: bool,
    },
}
