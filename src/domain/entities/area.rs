//! Area entity
//!
//! An organizational fund of the cooperative. Every realized commission
//! is shared evenly across all areas that exist at realization time, so
//! `balance` only ever grows.

use serde::{Deserialize, Serialize};

use super::validation::{require, InvalidField};
use crate::domain::value_objects::{AreaId, Money};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: AreaId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub balance: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArea {
    pub name: String,
    pub description: String,
}

fn check(name: &str, description: &str) -> Result<(), InvalidField> {
    require("name", name)?;
    require("description", description)
}

impl NewArea {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<(), InvalidField> {
        check(&self.name, &self.description)
    }
}

impl Area {
    pub fn create(draft: NewArea) -> Self {
        Self {
            id: AreaId::new(),
            name: draft.name.trim().to_string(),
            description: draft.description.trim().to_string(),
            balance: Money::zero(),
        }
    }

    pub fn validate(&self) -> Result<(), InvalidField> {
        check(&self.name, &self.description)
    }

    /// Balance after crediting `amount`, `None` on overflow
    pub(crate) fn credited(&self, amount: Money) -> Option<Money> {
        self.balance.checked_add(amount)
    }
}
