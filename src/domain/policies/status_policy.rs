//! Status transition policy
//!
//! Decides which referral status changes are accepted.
//!
//! - `Strict` (default): `completed` and `cancelled` are terminal, and a
//!   transition to the current status is rejected.
//! - `Permissive`: any status may follow any other, including itself.
//!
//! Both policies keep history append-only and settlement idempotent;
//! the policy only decides whether a change is recorded at all.

use serde::{Deserialize, Serialize};

use crate::domain::invariant::InvariantViolation;
use crate::domain::value_objects::ReferralStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    #[default]
    Strict,
    Permissive,
}

impl TransitionPolicy {
    pub fn check(&self, from: ReferralStatus, to: ReferralStatus) -> Result<(), InvariantViolation> {
        match self {
            TransitionPolicy::Permissive => Ok(()),
            TransitionPolicy::Strict if from.is_terminal() => Err(InvariantViolation::TerminalStatus {
                status: from,
                requested: to,
            }),
            TransitionPolicy::Strict if from == to => {
                Err(InvariantViolation::UnchangedStatus { status: from })
            }
            TransitionPolicy::Strict => Ok(()),
        }
    }

    /// Statuses reachable from `from` under this policy
    pub fn allowed_from(&self, from: ReferralStatus) -> Vec<ReferralStatus> {
        ReferralStatus::ALL
            .into_iter()
            .filter(|to| self.check(from, *to).is_ok())
            .collect()
    }
}

impl std::fmt::Display for TransitionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionPolicy::Strict => write!(f, "strict"),
            TransitionPolicy::Permissive => write!(f, "permissive"),
        }
    }
}

impl std::str::FromStr for TransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(TransitionPolicy::Strict),
            "permissive" => Ok(TransitionPolicy::Permissive),
            other => Err(format!(
                "unknown transition policy '{}' (expected strict or permissive)",
                other
            )),
        }
    }
}
