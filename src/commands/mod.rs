//! Command handlers
//!
//! One module per subcommand group. Handlers resolve arguments, call the
//! store and render the result as a table or a JSON document.

mod area;
mod commission;
mod company;
mod dashboard;
mod member;
mod referral;

use std::io;

use anyhow::Result;
use serde::Serialize;

use resi::domain::value_objects::{AreaId, CompanyId, EntityKind, MemberId, ReferralId};
use resi::presentation::cli::Commands;
use resi::presentation::output::{self, OutputFormat};
use resi::presentation::{resolve_id, ConcreteStore};
use resi::ResiResult;

/// Everything a handler needs
pub struct Session {
    pub store: ConcreteStore,
    pub format: OutputFormat,
    /// How many referrals the dashboard lists
    pub recent_limit: usize,
}

/// How a handled command ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// A guard refused the command; the message says why
    Refused(String),
}

impl Session {
    /// Print `value` as JSON, or the text `render` builds
    fn emit<T: Serialize + ?Sized>(&self, value: &T, render: impl FnOnce() -> String) -> io::Result<()> {
        if self.format.is_json() {
            output::print_json(value)
        } else {
            print!("{}", render());
            Ok(())
        }
    }

    fn company_id(&self, input: &str) -> ResiResult<CompanyId> {
        resolve_id(
            EntityKind::Company,
            input,
            self.store.list_companies().iter().map(|c| c.id),
        )
    }

    fn member_id(&self, input: &str) -> ResiResult<MemberId> {
        resolve_id(
            EntityKind::Member,
            input,
            self.store.list_members().iter().map(|m| m.id),
        )
    }

    fn area_id(&self, input: &str) -> ResiResult<AreaId> {
        resolve_id(
            EntityKind::Area,
            input,
            self.store.list_areas().iter().map(|a| a.id),
        )
    }

    fn referral_id(&self, input: &str) -> ResiResult<ReferralId> {
        resolve_id(
            EntityKind::Referral,
            input,
            self.store.list_referrals().iter().map(|r| r.id),
        )
    }

    fn company_name(&self, id: CompanyId) -> String {
        self.store
            .get_company(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|_| output::short_id(id))
    }

    fn member_name(&self, id: MemberId) -> String {
        self.store
            .get_member(id)
            .map(|m| m.name.clone())
            .unwrap_or_else(|_| output::short_id(id))
    }
}

pub fn dispatch(command: Commands, session: &mut Session) -> Result<Outcome> {
    match command {
        Commands::Company { action } => company::run(action, session),
        Commands::Member { action } => member::run(action, session),
        Commands::Area { action } => area::run(action, session),
        Commands::Referral { action } => referral::run(action, session),
        Commands::Commission { action } => commission::run(action, session),
        Commands::Dashboard => dashboard::run(session),
    }
}

/// JSON body printed for a delete, whether or not it went through
#[derive(Serialize)]
struct Deletion<'a> {
    kind: &'a str,
    id: String,
    deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

fn report_deletion(
    session: &Session,
    kind: EntityKind,
    id: impl std::fmt::Display,
    name: &str,
    refused: Option<String>,
) -> Result<Outcome> {
    let kind_name = kind.to_string();
    let body = Deletion {
        kind: &kind_name,
        id: id.to_string(),
        deleted: refused.is_none(),
        reason: refused.clone(),
    };

    match refused {
        None => {
            session.emit(&body, || format!("Removed {} {}\n", kind_name, name))?;
            Ok(Outcome::Done)
        }
        Some(reason) => {
            if session.format.is_json() {
                output::print_json(&body)?;
            }
            Ok(Outcome::Refused(format!(
                "cannot remove {} {}: {}",
                kind_name, name, reason
            )))
        }
    }
}
