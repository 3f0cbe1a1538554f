//! Area command handler

use anyhow::Result;

use resi::domain::entities::NewArea;
use resi::domain::policies::area_deletion_block;
use resi::domain::services::AreaShare;
use resi::domain::value_objects::{EntityKind, Money};
use resi::presentation::cli::AreaCommand;
use resi::presentation::output::{brl, percent, short_id, Table};

use super::{report_deletion, Outcome, Session};

pub fn run(action: AreaCommand, session: &mut Session) -> Result<Outcome> {
    match action {
        AreaCommand::Add { name, description } => {
            let area = session.store.create_area(NewArea::new(name, description))?;
            session.emit(&area, || {
                format!("Created area {} ({})\n", area.name, short_id(area.id))
            })?;
        }

        AreaCommand::Edit {
            id,
            name,
            description,
        } => {
            let id = session.area_id(&id)?;
            let mut area = session.store.get_area(id)?.clone();
            if let Some(name) = name {
                area.name = name;
            }
            if let Some(description) = description {
                area.description = description;
            }
            session.store.update_area(area)?;

            let area = session.store.get_area(id)?;
            session.emit(area, || format!("Updated area {}\n", area.name))?;
        }

        AreaCommand::Remove { id } => {
            let id = session.area_id(&id)?;
            let name = session.store.get_area(id)?.name.clone();
            let block = area_deletion_block(session.store.list_areas());

            let refused = if session.store.delete_area(id)? {
                None
            } else {
                Some(block.map(|b| b.to_string()).unwrap_or_default())
            };
            return report_deletion(session, EntityKind::Area, id, &name, refused);
        }

        AreaCommand::List => {
            let shares = session.store.area_shares();
            session.emit(&shares, || render_shares(&shares))?;
        }
    }
    Ok(Outcome::Done)
}

/// Areas with balances and their share of all distributed funds
pub(super) fn render_shares(shares: &[AreaShare<'_>]) -> String {
    let mut table = Table::new(["Id", "Area", "Description", "Balance", "Share"])
        .right(3)
        .right(4);
    for share in shares {
        table.add_row([
            short_id(share.area.id),
            share.area.name.clone(),
            share.area.description.clone(),
            brl(share.area.balance),
            percent(share.percentage),
        ]);
    }
    let total: Money = shares.iter().map(|s| s.area.balance).sum();
    table.add_row([
        String::new(),
        "Total".to_string(),
        String::new(),
        brl(total),
        String::new(),
    ]);
    table.render()
}
