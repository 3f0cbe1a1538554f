//! Referral command handler

use anyhow::Result;
use serde::Serialize;

use resi::domain::entities::{AreaDistribution, Commission, NewReferral, Referral, StatusChange};
use resi::domain::services::{BoardColumn, ReferralFilter};
use resi::domain::value_objects::{Money, ReferralStatus};
use resi::presentation::cli::ReferralCommand;
use resi::presentation::output::{self, brl, key_values, short_id, Table};

use super::{Outcome, Session};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReferralDetail<'a> {
    referral: &'a Referral,
    commission: Option<&'a Commission>,
    allowed_transitions: Vec<ReferralStatus>,
}

#[derive(Serialize)]
struct Moved<'a> {
    referral: &'a Referral,
    change: &'a StatusChange,
    realized: bool,
    distributions: &'a [AreaDistribution],
}

pub fn run(action: ReferralCommand, session: &mut Session) -> Result<Outcome> {
    match action {
        ReferralCommand::Add {
            company,
            member,
            client,
            service,
            value,
        } => {
            let company_id = session.company_id(&company)?;
            let member_id = session.member_id(&member)?;
            let referral = session.store.create_referral(NewReferral {
                company_id,
                member_id,
                client_name: client,
                service,
                value,
            })?;

            let detail = ReferralDetail {
                referral: &referral,
                commission: session.store.get_commission(referral.id).ok(),
                allowed_transitions: session.store.allowed_transitions(referral.id)?,
            };
            session.emit(&detail, || {
                let mut text = format!(
                    "Created referral {} for {} ({})\n",
                    short_id(referral.id),
                    referral.client_name,
                    brl(referral.value)
                );
                if let Some(commission) = detail.commission {
                    text.push_str(&format!(
                        "Pending commission {} (member {}, RESI {})\n",
                        brl(commission.total_amount),
                        brl(commission.member_amount),
                        brl(commission.resi_amount)
                    ));
                }
                text
            })?;
        }

        ReferralCommand::Move { id, status } => {
            let id = session.referral_id(&id)?;
            let outcome = session.store.transition_referral_status(id, status)?;

            let session = &*session;
            let moved = Moved {
                referral: session.store.get_referral(id)?,
                change: &outcome.change,
                realized: outcome.realized(),
                distributions: &outcome.distributions,
            };
            session.emit(&moved, || render_move(session, &moved))?;
        }

        ReferralCommand::List {
            company,
            member,
            status,
        } => {
            let session = &*session;
            let filter = ReferralFilter {
                company: company.map(|c| session.company_id(&c)).transpose()?,
                member: member.map(|m| session.member_id(&m)).transpose()?,
                status,
            };
            let referrals = session.store.filter_referrals(&filter);
            session.emit(&referrals, || render_list(session, &referrals))?;
        }

        ReferralCommand::Show { id } => {
            let session = &*session;
            let id = session.referral_id(&id)?;
            let detail = ReferralDetail {
                referral: session.store.get_referral(id)?,
                commission: session.store.get_commission(id).ok(),
                allowed_transitions: session.store.allowed_transitions(id)?,
            };
            session.emit(&detail, || render_detail(session, &detail))?;
        }

        ReferralCommand::Board => {
            let session = &*session;
            let board = session.store.pipeline_board();
            session.emit(&board, || render_board(session, &board))?;
        }
    }
    Ok(Outcome::Done)
}

/// Referral rows shared by list and dashboard views
pub(super) fn render_list(session: &Session, referrals: &[&Referral]) -> String {
    if referrals.is_empty() {
        return "No referrals.\n".to_string();
    }

    let mut table = Table::new([
        "Id", "Client", "Service", "Company", "Member", "Value", "Status", "Created",
    ])
    .right(5);
    for referral in referrals {
        table.add_row([
            short_id(referral.id),
            referral.client_name.clone(),
            referral.service.clone(),
            session.company_name(referral.company_id),
            session.member_name(referral.member_id),
            brl(referral.value),
            referral.status().label().to_string(),
            output::date(referral.created_at),
        ]);
    }
    table.render()
}

fn render_move(session: &Session, moved: &Moved<'_>) -> String {
    let from = moved
        .change
        .previous_status
        .map(|s| s.label())
        .unwrap_or("-");
    let mut out = format!(
        "{}: {} → {}\n",
        moved.referral.client_name,
        from,
        moved.change.new_status.label()
    );

    if moved.realized {
        let total: Money = moved.distributions.iter().map(|d| d.amount).sum();
        out.push_str(&format!(
            "Commission {} realized and shared across {} areas\n",
            brl(total),
            moved.distributions.len()
        ));
        let mut table = Table::new(["Area", "Amount"]).right(1);
        for distribution in moved.distributions {
            let area = session
                .store
                .get_area(distribution.area_id)
                .map(|a| a.name.clone())
                .unwrap_or_else(|_| short_id(distribution.area_id));
            table.add_row([area, brl(distribution.amount)]);
        }
        out.push_str(&table.render());
    }
    out
}

fn render_detail(session: &Session, detail: &ReferralDetail<'_>) -> String {
    let referral = detail.referral;
    let mut pairs = vec![
        ("Id", referral.id.to_string()),
        ("Client", referral.client_name.clone()),
        ("Service", referral.service.clone()),
        ("Company", session.company_name(referral.company_id)),
        ("Member", session.member_name(referral.member_id)),
        ("Value", brl(referral.value)),
        ("Status", referral.status().label().to_string()),
        ("Created", output::date(referral.created_at)),
    ];
    if let Some(commission) = detail.commission {
        let state = if commission.is_realized() {
            "received"
        } else if referral.status() == ReferralStatus::Cancelled {
            "cancelled"
        } else {
            "pending"
        };
        pairs.push((
            "Commission",
            format!("{} ({})", brl(commission.total_amount), state),
        ));
        pairs.push(("Member share", brl(commission.member_amount)));
        pairs.push(("RESI share", brl(commission.resi_amount)));
    }
    let next: Vec<&str> = detail.allowed_transitions.iter().map(|s| s.as_str()).collect();
    pairs.push((
        "Can move to",
        if next.is_empty() {
            "-".to_string()
        } else {
            next.join(", ")
        },
    ));

    let mut out = key_values(&pairs);
    let mut history = Table::new(["When", "From", "To"]);
    for change in referral.status_history() {
        history.add_row([
            change.changed_at.format("%d/%m/%Y %H:%M").to_string(),
            change
                .previous_status
                .map(|s| s.label().to_string())
                .unwrap_or_else(|| "-".to_string()),
            change.new_status.label().to_string(),
        ]);
    }
    out.push('\n');
    out.push_str(&history.render());
    out
}

fn render_board(session: &Session, board: &[BoardColumn<'_>]) -> String {
    let mut out = String::new();
    for column in board {
        let total: Money = column.referrals.iter().map(|r| r.value).sum();
        out.push_str(&format!(
            "{} ({}, {})\n",
            column.status.label(),
            column.referrals.len(),
            brl(total)
        ));
        for referral in &column.referrals {
            out.push_str(&format!(
                "  {}  {}  {}  {}\n",
                short_id(referral.id),
                referral.client_name,
                session.company_name(referral.company_id),
                brl(referral.value)
            ));
        }
        out.push('\n');
    }
    out
}
