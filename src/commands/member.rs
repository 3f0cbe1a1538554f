//! Member command handler

use anyhow::Result;
use serde::Serialize;

use resi::domain::entities::{Member, NewMember, Referral};
use resi::domain::policies::member_deletion_block;
use resi::domain::services::{MemberRollup, ReferralFilter};
use resi::domain::value_objects::EntityKind;
use resi::presentation::cli::MemberCommand;
use resi::presentation::output::{self, brl, key_values, short_id, Table};

use super::{report_deletion, Outcome, Session};

#[derive(Serialize)]
struct MemberDetail<'a> {
    member: &'a Member,
    rollup: Option<&'a MemberRollup>,
    referrals: Vec<&'a Referral>,
}

pub fn run(action: MemberCommand, session: &mut Session) -> Result<Outcome> {
    match action {
        MemberCommand::Add { name, email, phone } => {
            let member = session
                .store
                .create_member(NewMember { name, email, phone })?;
            session.emit(&member, || {
                format!("Created member {} ({})\n", member.name, short_id(member.id))
            })?;
        }

        MemberCommand::Edit {
            id,
            name,
            email,
            phone,
        } => {
            let id = session.member_id(&id)?;
            let mut member = session.store.get_member(id)?.clone();
            if let Some(name) = name {
                member.name = name;
            }
            if let Some(email) = email {
                member.email = email;
            }
            if let Some(phone) = phone {
                member.phone = phone;
            }
            session.store.update_member(member)?;

            let member = session.store.get_member(id)?;
            session.emit(member, || format!("Updated member {}\n", member.name))?;
        }

        MemberCommand::Remove { id } => {
            let id = session.member_id(&id)?;
            let name = session.store.get_member(id)?.name.clone();
            let block = member_deletion_block(id, session.store.list_referrals());

            let refused = if session.store.delete_member(id)? {
                None
            } else {
                Some(block.map(|b| b.to_string()).unwrap_or_default())
            };
            return report_deletion(session, EntityKind::Member, id, &name, refused);
        }

        MemberCommand::List => {
            let session = &*session;
            let members = session.store.list_members();
            session.emit(members, || render_list(members))?;
        }

        MemberCommand::Show { id } => {
            let session = &*session;
            let id = session.member_id(&id)?;
            let rollups = session.store.member_rollups();
            let detail = MemberDetail {
                member: session.store.get_member(id)?,
                rollup: rollups.iter().find(|r| r.member_id == id),
                referrals: session.store.filter_referrals(&ReferralFilter {
                    member: Some(id),
                    ..ReferralFilter::default()
                }),
            };
            session.emit(&detail, || render_detail(session, &detail))?;
        }
    }
    Ok(Outcome::Done)
}

fn render_list(members: &[Member]) -> String {
    if members.is_empty() {
        return "No members yet.\n".to_string();
    }

    let mut table = Table::new(["Id", "Name", "E-mail", "Phone", "Since"]);
    for member in members {
        table.add_row([
            short_id(member.id),
            member.name.clone(),
            member.email.clone(),
            member.phone.clone(),
            output::date(member.created_at),
        ]);
    }
    table.render()
}

fn render_detail(session: &Session, detail: &MemberDetail<'_>) -> String {
    let member = detail.member;
    let mut pairs = vec![
        ("Id", member.id.to_string()),
        ("Name", member.name.clone()),
        ("E-mail", member.email.clone()),
        ("Phone", member.phone.clone()),
        ("Since", output::date(member.created_at)),
    ];
    if let Some(rollup) = detail.rollup {
        pairs.push((
            "Referrals",
            format!("{} ({} completed)", rollup.referrals, rollup.completed),
        ));
        pairs.push(("Commissions", brl(rollup.total_commissions)));
        pairs.push(("Received", brl(rollup.total_received)));
        pairs.push(("Pending", brl(rollup.total_pending)));
    }

    let mut out = key_values(&pairs);
    if !detail.referrals.is_empty() {
        let mut table = Table::new(["Id", "Client", "Company", "Value", "Status"]).right(3);
        for referral in &detail.referrals {
            table.add_row([
                short_id(referral.id),
                referral.client_name.clone(),
                session.company_name(referral.company_id),
                brl(referral.value),
                referral.status().label().to_string(),
            ]);
        }
        out.push('\n');
        out.push_str(&table.render());
    }
    out
}
