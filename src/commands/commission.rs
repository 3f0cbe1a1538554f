//! Commission command handler

use anyhow::Result;
use serde::Serialize;

use resi::domain::entities::Commission;
use resi::domain::services::{CommissionTotals, MemberRollup};
use resi::domain::value_objects::ReferralStatus;
use resi::presentation::cli::CommissionCommand;
use resi::presentation::output::{brl, key_values, short_id, Table};

use super::{Outcome, Session};

#[derive(Serialize)]
struct CommissionReport<'a> {
    commissions: &'a [Commission],
    totals: CommissionTotals,
}

pub fn run(action: CommissionCommand, session: &mut Session) -> Result<Outcome> {
    let session = &*session;
    match action {
        CommissionCommand::List { by_member: true } => {
            let rollups = session.store.member_rollups();
            session.emit(&rollups, || render_rollups(&rollups))?;
        }
        CommissionCommand::List { by_member: false } => {
            let report = CommissionReport {
                commissions: session.store.list_commissions(),
                totals: session.store.commission_totals(),
            };
            session.emit(&report, || render_report(session, &report))?;
        }
    }
    Ok(Outcome::Done)
}

/// Pending/received totals block, also shown on the dashboard
pub(super) fn render_totals(totals: &CommissionTotals) -> String {
    key_values(&[
        ("Pending", format!("{} ({} deals)", brl(totals.pending), totals.pending_deals)),
        ("Received", brl(totals.received)),
        ("Members' share", brl(totals.member_share)),
        ("RESI share", brl(totals.resi_share)),
    ])
}

fn render_report(session: &Session, report: &CommissionReport<'_>) -> String {
    let mut out = String::new();
    if report.commissions.is_empty() {
        out.push_str("No commissions yet.\n");
    } else {
        let mut table = Table::new(["Referral", "Client", "Member", "Total", "Member", "RESI", "State"])
            .right(3)
            .right(4)
            .right(5);
        for commission in report.commissions {
            let referral = session.store.get_referral(commission.referral_id).ok();
            let state = match referral.map(|r| r.status()) {
                _ if commission.is_realized() => "Recebida",
                Some(ReferralStatus::Cancelled) => "Cancelada",
                _ => "Pendente",
            };
            table.add_row([
                short_id(commission.referral_id),
                referral.map(|r| r.client_name.clone()).unwrap_or_default(),
                referral
                    .map(|r| session.member_name(r.member_id))
                    .unwrap_or_default(),
                brl(commission.total_amount),
                brl(commission.member_amount),
                brl(commission.resi_amount),
                state.to_string(),
            ]);
        }
        out.push_str(&table.render());
    }
    out.push('\n');
    out.push_str(&render_totals(&report.totals));
    out
}

fn render_rollups(rollups: &[MemberRollup]) -> String {
    if rollups.is_empty() {
        return "No members yet.\n".to_string();
    }

    let mut table = Table::new(["Member", "Referrals", "Completed", "Commissions", "Received", "Pending"])
        .right(1)
        .right(2)
        .right(3)
        .right(4)
        .right(5);
    for rollup in rollups {
        table.add_row([
            rollup.member_name.clone(),
            rollup.referrals.to_string(),
            rollup.completed.to_string(),
            brl(rollup.total_commissions),
            brl(rollup.total_received),
            brl(rollup.total_pending),
        ]);
    }
    table.render()
}
