//! Store Event Port
//!
//! Provides an observable interface for store mutations.
//! Enables NDJSON audit streams and test assertions on side effects.

use serde::Serialize;

use crate::domain::value_objects::{
    AreaId, CommissionId, CompanyId, MemberId, Money, ReferralId, ReferralStatus,
};

/// Event emitted after a store command takes effect
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreEvent {
    CompanyCreated { id: CompanyId },
    CompanyUpdated { id: CompanyId },
    CompanyDeleted { id: CompanyId },

    MemberCreated { id: MemberId },
    MemberUpdated { id: MemberId },
    MemberDeleted { id: MemberId },

    AreaCreated { id: AreaId },
    AreaUpdated { id: AreaId },
    AreaDeleted { id: AreaId },

    /// A delete was refused by a guard
    DeletionBlocked { kind: String, id: String, reason: String },

    ReferralCreated {
        id: ReferralId,
        commission: CommissionId,
        total: Money,
    },

    StatusChanged {
        referral: ReferralId,
        from: ReferralStatus,
        to: ReferralStatus,
    },

    /// Commission realized and credited to `areas` areas
    CommissionRealized {
        commission: CommissionId,
        total: Money,
        areas: usize,
    },

    /// Saving the snapshot failed; in-memory state is unaffected
    PersistFailed { error: String },
}

/// Trait for receiving store events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait StoreEventSink: Send + Sync {
    fn on_event(&self, event: StoreEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl StoreEventSink for NoopEventSink {
    fn on_event(&self, _event: StoreEvent) {}
}
