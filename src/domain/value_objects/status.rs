//! Referral status value object
//!
//! A referral moves through the pipeline
//! `prospect -> in-progress -> completed | cancelled`.
//! `completed` and `cancelled` are terminal; the other two are "active"
//! and block deletion of the company and member they reference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Pipeline status of a referral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReferralStatus {
    /// Freshly registered, nothing negotiated yet
    #[default]
    Prospect,
    /// Negotiation under way
    InProgress,
    /// Deal closed; the commission is realized
    Completed,
    /// Deal lost
    Cancelled,
}

impl ReferralStatus {
    /// All statuses in pipeline order
    pub const ALL: [ReferralStatus; 4] = [
        ReferralStatus::Prospect,
        ReferralStatus::InProgress,
        ReferralStatus::Completed,
        ReferralStatus::Cancelled,
    ];

    /// Returns true for `prospect` and `in-progress`
    pub fn is_active(&self) -> bool {
        matches!(self, ReferralStatus::Prospect | ReferralStatus::InProgress)
    }

    /// Returns true for `completed` and `cancelled`
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    /// Wire name, as stored and accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferralStatus::Prospect => "prospect",
            ReferralStatus::InProgress => "in-progress",
            ReferralStatus::Completed => "completed",
            ReferralStatus::Cancelled => "cancelled",
        }
    }

    /// Human label shown on boards and tables
    pub fn label(&self) -> &'static str {
        match self {
            ReferralStatus::Prospect => "Prospecto",
            ReferralStatus::InProgress => "Em andamento",
            ReferralStatus::Completed => "Concluído",
            ReferralStatus::Cancelled => "Cancelado",
        }
    }
}

impl fmt::Display for ReferralStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown status name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown referral status '{0}' (expected prospect, in-progress, completed or cancelled)")]
pub struct UnknownStatus(pub String);

impl FromStr for ReferralStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "prospect" => Ok(ReferralStatus::Prospect),
            "in-progress" | "inprogress" => Ok(ReferralStatus::InProgress),
            "completed" => Ok(ReferralStatus::Completed),
            "cancelled" | "canceled" => Ok(ReferralStatus::Cancelled),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}
