//! Entity identifier value objects
//!
//! Every entity gets its own newtype over a v4 UUID so a `CompanyId`
//! can never be passed where a `MemberId` is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim()).map(Self)
            }
        }
    };
}

entity_id!(
    /// Identifier of a partner company
    CompanyId
);
entity_id!(
    /// Identifier of a referring member
    MemberId
);
entity_id!(
    /// Identifier of an organizational area (fund)
    AreaId
);
entity_id!(
    /// Identifier of a referral
    ReferralId
);
entity_id!(
    /// Identifier of a status history entry
    StatusChangeId
);
entity_id!(
    /// Identifier of a commission
    CommissionId
);
entity_id!(
    /// Identifier of an area distribution ledger entry
    DistributionId
);

/// Kind of entity, used to describe lookups that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Company,
    Member,
    Area,
    Referral,
    Commission,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Company => "company",
            EntityKind::Member => "member",
            EntityKind::Area => "area",
            EntityKind::Referral => "referral",
            EntityKind::Commission => "commission",
        };
        write!(f, "{}", name)
    }
}
