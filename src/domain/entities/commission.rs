//! Commission entity
//!
//! Exactly one commission exists per referral. Its amounts are fixed at
//! creation from the referral value and the company's rate at that
//! moment; later rate changes never touch it. Realization flips
//! `is_realized` once and is irreversible.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AreaId, CommissionId, DistributionId, Money, ReferralId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    pub id: CommissionId,
    pub referral_id: ReferralId,
    pub total_amount: Money,
    /// Share owed to the referring member
    pub member_amount: Money,
    /// Share kept by the cooperative
    pub resi_amount: Money,
    is_realized: bool,
    pub calculated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    realized_at: Option<DateTime<Utc>>,
}

impl Commission {
    pub(crate) fn pending(
        referral_id: ReferralId,
        total_amount: Money,
        member_amount: Money,
        resi_amount: Money,
        calculated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CommissionId::new(),
            referral_id,
            total_amount,
            member_amount,
            resi_amount,
            is_realized: false,
            calculated_at,
            realized_at: None,
        }
    }

    pub fn is_realized(&self) -> bool {
        self.is_realized
    }

    pub fn realized_at(&self) -> Option<DateTime<Utc>> {
        self.realized_at
    }

    pub(crate) fn mark_realized(&mut self, at: DateTime<Utc>) {
        self.is_realized = true;
        self.realized_at = Some(at);
    }
}

/// Ledger entry: the share of one realized commission credited to one area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaDistribution {
    pub id: DistributionId,
    pub commission_id: CommissionId,
    pub area_id: AreaId,
    pub amount: Money,
    pub distributed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_unrealized() {
        let c = Commission::pending(
            ReferralId::new(),
            Money::from_cents(15000),
            Money::from_cents(7500),
            Money::from_cents(7500),
            Utc::now(),
        );
        assert!(!c.is_realized());
        assert_eq!(c.realized_at(), None);
    }

    #[test]
    fn mark_realized_records_time() {
        let now = Utc::now();
        let mut c = Commission::pending(
            ReferralId::new(),
            Money::from_cents(100),
            Money::from_cents(50),
            Money::from_cents(50),
            now,
        );
        c.mark_realized(now);
        assert!(c.is_realized());
        assert_eq!(c.realized_at(), Some(now));
    }

    #[test]
    fn legacy_record_without_realized_at_loads() {
        let json = format!(
            r#"{{"id":"{}","referralId":"{}","totalAmount":3750,"memberAmount":1875,
                "resiAmount":1875,"isRealized":true,"calculatedAt":"2023-05-20T00:00:00Z"}}"#,
            CommissionId::new(),
            ReferralId::new()
        );
        let c: Commission = serde_json::from_str(&json).unwrap();
        assert!(c.is_realized());
        assert_eq!(c.total_amount, Money::from_cents(375000));
        assert_eq!(c.realized_at(), None);
    }
}
