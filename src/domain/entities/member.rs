//! Member entity - a cooperative member who refers clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{require, require_email, InvalidField};
use crate::domain::value_objects::MemberId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub phone: String,
}

fn check(name: &str, email: &str, phone: &str) -> Result<(), InvalidField> {
    require("name", name)?;
    require_email("email", email)?;
    require("phone", phone)
}

impl NewMember {
    pub fn validate(&self) -> Result<(), InvalidField> {
        check(&self.name, &self.email, &self.phone)
    }
}

impl Member {
    pub fn create(draft: NewMember, created_at: DateTime<Utc>) -> Self {
        Self {
            id: MemberId::new(),
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            created_at,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidField> {
        check(&self.name, &self.email, &self.phone)
    }
}
