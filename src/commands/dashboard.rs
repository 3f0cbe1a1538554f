//! Dashboard command handler

use anyhow::Result;
use serde::Serialize;

use resi::domain::entities::Referral;
use resi::domain::services::{AreaShare, DashboardSummary};
use resi::presentation::output::{brl, key_values};

use super::area::render_shares;
use super::commission::render_totals;
use super::referral::render_list;
use super::{Outcome, Session};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Dashboard<'a> {
    summary: DashboardSummary,
    recent_referrals: Vec<&'a Referral>,
    areas: Vec<AreaShare<'a>>,
}

pub fn run(session: &mut Session) -> Result<Outcome> {
    let session = &*session;
    let dashboard = Dashboard {
        summary: session.store.dashboard(),
        recent_referrals: session.store.recent_referrals(session.recent_limit),
        areas: session.store.area_shares(),
    };
    session.emit(&dashboard, || render(session, &dashboard))?;
    Ok(Outcome::Done)
}

fn render(session: &Session, dashboard: &Dashboard<'_>) -> String {
    let summary = &dashboard.summary;
    let mut out = key_values(&[
        ("Companies", summary.companies.to_string()),
        ("Members", summary.members.to_string()),
        (
            "Referrals",
            format!(
                "{} ({} completed)",
                summary.referrals, summary.completed_referrals
            ),
        ),
        ("Commission value", brl(summary.total_commission_value)),
    ]);

    out.push('\n');
    out.push_str(&render_totals(&summary.commissions));

    out.push_str("\nRecent referrals\n");
    out.push_str(&render_list(session, &dashboard.recent_referrals));

    out.push_str("\nAreas\n");
    out.push_str(&render_shares(&dashboard.areas));
    out
}
