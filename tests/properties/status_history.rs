//! Property tests for the append-only status history.

use proptest::prelude::*;

use resi::application::StoreOptions;
use resi::domain::policies::TransitionPolicy;
use resi::domain::ports::Clock;
use resi::domain::value_objects::ReferralStatus;

use crate::common::*;

fn status() -> impl Strategy<Value = ReferralStatus> {
    prop::sample::select(ReferralStatus::ALL.to_vec())
}

fn policy() -> impl Strategy<Value = TransitionPolicy> {
    prop_oneof![
        Just(TransitionPolicy::Strict),
        Just(TransitionPolicy::Permissive),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an accepted transition appends exactly one entry and leaves
    /// earlier entries untouched; a rejected one changes nothing.
    #[test]
    fn property_history_is_append_only(
        policy in policy(),
        statuses in prop::collection::vec(status(), 1..16),
    ) {
        let clock = clock();
        let mut store = open_store_with(&clock, StoreOptions {
            policy,
            ..StoreOptions::default()
        });
        let company = store.create_company(company("Parceira", "12")).unwrap();
        let member = store.create_member(member("Ana")).unwrap();
        let created = store.create_referral(referral(company.id, member.id, "2500")).unwrap();

        for status in statuses {
            let before = store.get_referral(created.id).unwrap().clone();
            clock.advance(chrono::Duration::minutes(5));

            let result = store.transition_referral_status(created.id, status);
            let after = store.get_referral(created.id).unwrap();

            match result {
                Ok(outcome) => {
                    prop_assert_eq!(after.status_history().len(), before.status_history().len() + 1);
                    prop_assert_eq!(&after.status_history()[..before.status_history().len()], before.status_history());
                    let last = after.status_history().last().unwrap();
                    prop_assert_eq!(last, &outcome.change);
                    prop_assert_eq!(last.previous_status, Some(before.status()));
                    prop_assert_eq!(last.new_status, status);
                    prop_assert_eq!(last.changed_at, clock.now());
                    prop_assert_eq!(after.status(), status);
                }
                Err(_) => {
                    prop_assert_eq!(policy, TransitionPolicy::Strict);
                    prop_assert_eq!(after, &before);
                }
            }
        }
    }

    /// PROPERTY: once set, `commissionCalculated` never goes back to false.
    #[test]
    fn property_commission_calculated_is_sticky(
        statuses in prop::collection::vec(status(), 1..16),
    ) {
        let clock = clock();
        let mut store = open_permissive(&clock);
        let company = store.create_company(company("Parceira", "12")).unwrap();
        let member = store.create_member(member("Ana")).unwrap();
        let created = store.create_referral(referral(company.id, member.id, "2500")).unwrap();

        let mut seen_completed = false;
        for status in statuses {
            store.transition_referral_status(created.id, status).unwrap();
            seen_completed |= status == ReferralStatus::Completed;
            prop_assert_eq!(
                store.get_referral(created.id).unwrap().commission_calculated(),
                seen_completed
            );
        }
    }
}
