//! Property tests for commission creation and realization.

use proptest::prelude::*;
use rust_decimal::Decimal;

use resi::application::StoreOptions;
use resi::domain::entities::NewArea;
use resi::domain::policies::TransitionPolicy;
use resi::domain::value_objects::{CommissionRate, Money, ReferralStatus};

use crate::common::*;

fn value() -> impl Strategy<Value = Money> {
    (1i64..=1_000_000_000).prop_map(Money::from_cents)
}

/// Rates from 1% to 100% in steps of 0.01
fn rate() -> impl Strategy<Value = CommissionRate> {
    (100i64..=10_000).prop_map(|hundredths| CommissionRate::new(Decimal::new(hundredths, 2)).unwrap())
}

fn status() -> impl Strategy<Value = ReferralStatus> {
    prop::sample::select(ReferralStatus::ALL.to_vec())
}

fn areas(count: usize) -> Vec<NewArea> {
    (0..count)
        .map(|i| NewArea::new(format!("Área {}", i + 1), "Fundo"))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a new referral's commission is value × rate / 100, unrealized,
    /// and its two shares add back up to the total.
    #[test]
    fn property_commission_matches_rate(value in value(), rate in rate()) {
        let clock = clock();
        let mut store = open_store(&clock);
        let mut draft = company("Parceira", "10");
        draft.commission_percentage = rate;
        let company = store.create_company(draft).unwrap();
        let member = store.create_member(member("Ana")).unwrap();

        let mut new_referral = referral(company.id, member.id, "1");
        new_referral.value = value;
        let created = store.create_referral(new_referral).unwrap();
        let commission = store.get_commission(created.id).unwrap();

        let expected = Money::new(value.amount() * rate.value() / Decimal::ONE_HUNDRED);
        prop_assert_eq!(commission.total_amount, expected);
        prop_assert!(!commission.is_realized());
        prop_assert_eq!(commission.member_amount + commission.resi_amount, commission.total_amount);
        prop_assert!(commission.member_amount <= commission.resi_amount);
        prop_assert!((commission.resi_amount - commission.member_amount) <= Money::from_cents(1));
    }

    /// PROPERTY: whatever the status sequence, areas are credited at most once,
    /// and exactly the commission total once the referral has completed.
    #[test]
    fn property_realization_is_single_and_conserving(
        value in value(),
        area_count in 1usize..=7,
        statuses in prop::collection::vec(status(), 1..12),
    ) {
        let clock = clock();
        let mut store = open_store_with(&clock, StoreOptions {
            policy: TransitionPolicy::Permissive,
            seed_areas: areas(area_count),
        });
        let company = store.create_company(company("Parceira", "15")).unwrap();
        let member = store.create_member(member("Ana")).unwrap();
        let mut new_referral = referral(company.id, member.id, "1");
        new_referral.value = value;
        let created = store.create_referral(new_referral).unwrap();
        let total = store.get_commission(created.id).unwrap().total_amount;

        let mut realizations = 0;
        let mut completed = false;
        for status in statuses {
            let outcome = store.transition_referral_status(created.id, status).unwrap();
            if outcome.realized() {
                realizations += 1;
                prop_assert_eq!(outcome.distributions.len(), area_count);
            }
            completed |= status == ReferralStatus::Completed;
        }

        let credited: Money = store.list_areas().iter().map(|a| a.balance).sum();
        let commission = store.get_commission(created.id).unwrap();
        if completed {
            prop_assert_eq!(realizations, 1);
            prop_assert!(commission.is_realized());
            prop_assert_eq!(credited, total);
            let ledger: Money = store.list_distributions().iter().map(|d| d.amount).sum();
            prop_assert_eq!(ledger, total);
        } else {
            prop_assert_eq!(realizations, 0);
            prop_assert!(!commission.is_realized());
            prop_assert!(credited.is_zero());
        }
    }

    /// PROPERTY: area shares differ by at most the residual cents and never
    /// go below the truncated even share.
    #[test]
    fn property_area_shares_are_even(value in value(), area_count in 1usize..=9) {
        let clock = clock();
        let mut store = open_store_with(&clock, StoreOptions {
            policy: TransitionPolicy::Strict,
            seed_areas: areas(area_count),
        });
        let company = store.create_company(company("Parceira", "100")).unwrap();
        let member = store.create_member(member("Ana")).unwrap();
        let mut new_referral = referral(company.id, member.id, "1");
        new_referral.value = value;
        let created = store.create_referral(new_referral).unwrap();
        store.transition_referral_status(created.id, ReferralStatus::Completed).unwrap();

        let balances: Vec<Money> = store.list_areas().iter().map(|a| a.balance).collect();
        let rest = &balances[1..];
        if let Some(min) = rest.iter().min() {
            prop_assert!(rest.iter().all(|b| b == min));
            prop_assert!(balances[0] >= *min);
            prop_assert!(balances[0] - *min < Money::from_cents(area_count as i64));
        }
    }
}
