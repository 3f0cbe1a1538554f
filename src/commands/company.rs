//! Company command handler

use anyhow::Result;

use resi::domain::entities::{Company, NewCompany};
use resi::domain::policies::company_deletion_block;
use resi::domain::value_objects::EntityKind;
use resi::presentation::cli::CompanyCommand;
use resi::presentation::output::{self, key_values, short_id, Table};

use super::{report_deletion, Outcome, Session};

pub fn run(action: CompanyCommand, session: &mut Session) -> Result<Outcome> {
    match action {
        CompanyCommand::Add {
            name,
            responsible,
            contact,
            rate,
        } => {
            let company = session.store.create_company(NewCompany {
                name,
                responsible_person: responsible,
                contact_info: contact,
                commission_percentage: rate,
            })?;
            session.emit(&company, || {
                format!("Created company {} ({})\n", company.name, short_id(company.id))
            })?;
        }

        CompanyCommand::Edit {
            id,
            responsible,
            contact,
            rate,
        } => {
            let id = session.company_id(&id)?;
            let mut company = session.store.get_company(id)?.clone();
            if let Some(responsible) = responsible {
                company.responsible_person = responsible;
            }
            if let Some(contact) = contact {
                company.contact_info = contact;
            }
            if let Some(rate) = rate {
                company.commission_percentage = rate;
            }
            session.store.update_company(company)?;

            let company = session.store.get_company(id)?;
            session.emit(company, || format!("Updated company {}\n", company.name))?;
        }

        CompanyCommand::Remove { id } => {
            let id = session.company_id(&id)?;
            let name = session.store.get_company(id)?.name.clone();
            let block = company_deletion_block(id, session.store.list_referrals());

            let refused = if session.store.delete_company(id)? {
                None
            } else {
                Some(block.map(|b| b.to_string()).unwrap_or_default())
            };
            return report_deletion(session, EntityKind::Company, id, &name, refused);
        }

        CompanyCommand::List => {
            let session = &*session;
            let companies = session.store.list_companies();
            session.emit(companies, || render_list(session, companies))?;
        }

        CompanyCommand::Show { id } => {
            let session = &*session;
            let id = session.company_id(&id)?;
            let company = session.store.get_company(id)?;
            session.emit(company, || render_detail(session, company))?;
        }
    }
    Ok(Outcome::Done)
}

fn render_list(session: &Session, companies: &[Company]) -> String {
    if companies.is_empty() {
        return "No companies yet.\n".to_string();
    }

    let mut table = Table::new(["Id", "Name", "Responsible", "Contact", "Rate", "Referrals"])
        .right(4)
        .right(5);
    for company in companies {
        let referrals = session
            .store
            .list_referrals()
            .iter()
            .filter(|r| r.company_id == company.id)
            .count();
        table.add_row([
            short_id(company.id),
            company.name.clone(),
            company.responsible_person.clone(),
            company.contact_info.clone(),
            company.commission_percentage.to_string(),
            referrals.to_string(),
        ]);
    }
    table.render()
}

fn render_detail(session: &Session, company: &Company) -> String {
    let referrals: Vec<_> = session
        .store
        .list_referrals()
        .iter()
        .filter(|r| r.company_id == company.id)
        .collect();
    let active = referrals.iter().filter(|r| r.is_active()).count();

    key_values(&[
        ("Id", company.id.to_string()),
        ("Name", company.name.clone()),
        ("Responsible", company.responsible_person.clone()),
        ("Contact", company.contact_info.clone()),
        ("Commission", company.commission_percentage.to_string()),
        ("Since", output::date(company.created_at)),
        ("Referrals", format!("{} ({} active)", referrals.len(), active)),
    ])
}
