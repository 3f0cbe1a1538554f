//! Referral entity
//!
//! A deal a member brought to a partner company. The referral owns an
//! append-only status history: entries are only ever pushed, never
//! edited or removed, and the first entry is the synthetic
//! `null -> prospect` change recorded at creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{require, InvalidField};
use crate::domain::value_objects::{
    CompanyId, MemberId, Money, ReferralId, ReferralStatus, StatusChangeId,
};

/// One entry of a referral's status history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub id: StatusChangeId,
    pub referral_id: ReferralId,
    pub previous_status: Option<ReferralStatus>,
    pub new_status: ReferralStatus,
    pub changed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    pub id: ReferralId,
    pub company_id: CompanyId,
    pub member_id: MemberId,
    pub client_name: String,
    pub service: String,
    pub value: Money,
    status: ReferralStatus,
    pub created_at: DateTime<Utc>,
    status_history: Vec<StatusChange>,
    #[serde(default)]
    commission_calculated: bool,
}

/// Input for registering a referral. The status is never supplied by
/// the caller; every referral starts as a prospect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReferral {
    pub company_id: CompanyId,
    pub member_id: MemberId,
    pub client_name: String,
    pub service: String,
    pub value: Money,
}

impl NewReferral {
    pub fn validate(&self) -> Result<(), InvalidField> {
        require("clientName", &self.client_name)?;
        require("service", &self.service)?;
        if !self.value.is_positive() {
            return Err(InvalidField::new("value", "must be greater than zero"));
        }
        if self.value > Money::max() {
            return Err(InvalidField::new(
                "value",
                format!("must not exceed {}", Money::max()),
            ));
        }
        Ok(())
    }
}

impl Referral {
    /// Open a new referral in `prospect` with its synthetic first history entry
    pub(crate) fn open(draft: NewReferral, now: DateTime<Utc>) -> Self {
        let id = ReferralId::new();
        Self {
            id,
            company_id: draft.company_id,
            member_id: draft.member_id,
            client_name: draft.client_name.trim().to_string(),
            service: draft.service.trim().to_string(),
            value: draft.value,
            status: ReferralStatus::Prospect,
            created_at: now,
            status_history: vec![StatusChange {
                id: StatusChangeId::new(),
                referral_id: id,
                previous_status: None,
                new_status: ReferralStatus::Prospect,
                changed_at: now,
            }],
            commission_calculated: false,
        }
    }

    pub fn status(&self) -> ReferralStatus {
        self.status
    }

    pub fn status_history(&self) -> &[StatusChange] {
        &self.status_history
    }

    /// True once the referral has reached `completed`; never reset.
    pub fn commission_calculated(&self) -> bool {
        self.commission_calculated
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Append a history entry and move to `new_status`
    pub(crate) fn record_status(&mut self, new_status: ReferralStatus, now: DateTime<Utc>) -> &StatusChange {
        self.status_history.push(StatusChange {
            id: StatusChangeId::new(),
            referral_id: self.id,
            previous_status: Some(self.status),
            new_status,
            changed_at: now,
        });
        self.status = new_status;
        if new_status == ReferralStatus::Completed {
            self.commission_calculated = true;
        }
        &self.status_history[self.status_history.len() - 1]
    }
}
