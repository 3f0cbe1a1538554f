//! resi CLI - referral and commission books for a cooperative
//!
//! Usage: resi [--json] [-v...] [--config PATH] [--data-dir PATH] <COMMAND>
//!
//! Commands:
//!   company     Manage partner companies
//!   member      Manage cooperative members
//!   area        Manage areas (funds)
//!   referral    Register and move referrals through the pipeline
//!   commission  Inspect commissions
//!   dashboard   Totals, recent referrals and area balances

mod commands;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resi::config::{Config, LogLevel};
use resi::presentation::{self, Cli, OutputFormat};

use commands::{Outcome, Session};

/// Exit status when a guard refuses a command (e.g. a blocked delete)
const EXIT_REFUSED: u8 = 2;

/// Filter variable checked before `RUST_LOG`
const LOG_ENV: &str = "RESI_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Refused(message)) => {
            eprintln!("error: {}", message);
            ExitCode::from(EXIT_REFUSED)
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<Outcome> {
    let cwd = std::env::current_dir()?;
    let source = Config::load_layered(cli.config.as_deref(), &cwd)?;
    init_tracing(cli.verbose, source.config.logging.level);

    for warning in &source.warnings {
        eprintln!("warning: {}", warning);
    }
    for error in &source.env_errors {
        eprintln!("warning: ignoring {}", error);
    }

    let mut config = source.config;
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = Some(dir);
    }
    let data_dir = config.data_dir();
    debug!(
        config = ?source.path,
        data_dir = %data_dir.display(),
        policy = %config.lifecycle.transitions,
        "starting"
    );

    let events = presentation::create_event_sink(cli.events.as_deref()).with_context(|| {
        format!(
            "cannot open event log {}",
            cli.events
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;
    let store = presentation::create_store_from_config(&config, events)
        .with_context(|| format!("cannot open books in {}", data_dir.display()))?;

    let mut session = Session {
        store,
        format: OutputFormat::from_json_flag(cli.json),
        recent_limit: config.dashboard.recent_limit,
    };
    let outcome = commands::dispatch(cli.command, &mut session)?;

    if let Some(error) = session.store.last_persist_error() {
        eprintln!("warning: changes were not saved: {}", error);
    }
    Ok(outcome)
}

/// Initialize tracing on stderr so `--json` stdout stays parseable.
///
/// `RESI_LOG` (or `RUST_LOG`) wins; otherwise `-v` picks the level,
/// falling back to the configured one.
fn init_tracing(verbose: u8, configured: LogLevel) {
    let level = if verbose > 0 {
        LogLevel::from_verbosity(verbose)
    } else {
        configured
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env(LOG_ENV)
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new(level.as_filter())),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
