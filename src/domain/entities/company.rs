//! Company entity
//!
//! A partner company that pays the cooperative a commission on every
//! referral it closes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{require, InvalidField};
use crate::domain::value_objects::{CommissionRate, CompanyId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub responsible_person: String,
    pub contact_info: String,
    pub commission_percentage: CommissionRate,
    pub created_at: DateTime<Utc>,
}

/// Input for registering a company
#[derive(Debug, Clone, PartialEq)]
pub struct NewCompany {
    pub name: String,
    pub responsible_person: String,
    pub contact_info: String,
    pub commission_percentage: CommissionRate,
}

fn check(name: &str, responsible_person: &str, contact_info: &str) -> Result<(), InvalidField> {
    require("name", name)?;
    require("responsiblePerson", responsible_person)?;
    require("contactInfo", contact_info)
}

impl NewCompany {
    pub fn validate(&self) -> Result<(), InvalidField> {
        check(&self.name, &self.responsible_person, &self.contact_info)
    }
}

impl Company {
    pub fn create(draft: NewCompany, created_at: DateTime<Utc>) -> Self {
        Self {
            id: CompanyId::new(),
            name: draft.name.trim().to_string(),
            responsible_person: draft.responsible_person.trim().to_string(),
            contact_info: draft.contact_info.trim().to_string(),
            commission_percentage: draft.commission_percentage,
            created_at,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidField> {
        check(&self.name, &self.responsible_person, &self.contact_info)
    }
}
