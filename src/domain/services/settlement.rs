//! Commission settlement
//!
//! Pure settlement rules: pricing a referral's commission when it is
//! registered, and realizing it exactly once into the area ledger when
//! the referral completes.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Area, AreaDistribution, Commission, Company, Referral};
use crate::domain::invariant::InvariantViolation;
use crate::domain::value_objects::{DistributionId, Money};

/// Amounts making up a commission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionQuote {
    pub total: Money,
    pub member: Money,
    pub resi: Money,
}

/// Price a referral at the company's current rate.
///
/// Returns `None` only when `value × rate` overflows the decimal range.
pub fn quote(value: Money, company: &Company) -> Option<CommissionQuote> {
    let total = value.percent(company.commission_percentage)?;
    let (member, resi) = total.split_half();
    Some(CommissionQuote { total, member, resi })
}

/// Build the pending commission owned by `referral`
pub fn calculate_pending(
    referral: &Referral,
    company: &Company,
    now: DateTime<Utc>,
) -> Option<Commission> {
    let quote = quote(referral.value, company)?;
    Some(Commission::pending(
        referral.id,
        quote.total,
        quote.member,
        quote.resi,
        now,
    ))
}

/// Realize `commission` and credit every area an even share.
///
/// The first area absorbs residual cents so the credited amounts always
/// add up to the commission total. An already realized commission, or a
/// credit that would overflow a balance, is rejected without touching
/// any balance.
pub fn realize(
    commission: &mut Commission,
    areas: &mut [Area],
    now: DateTime<Utc>,
) -> Result<Vec<AreaDistribution>, InvariantViolation> {
    if commission.is_realized() {
        return Err(InvariantViolation::CommissionAlreadyRealized {
            commission: commission.id,
        });
    }
    if areas.is_empty() {
        return Err(InvariantViolation::NoAreas);
    }

    let shares = commission.total_amount.allocate_evenly(areas.len());
    let balances = areas
        .iter()
        .zip(&shares)
        .map(|(area, &amount)| {
            area.credited(amount)
                .ok_or(InvariantViolation::BalanceOverflow { area: area.id })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let distributions = areas
        .iter_mut()
        .zip(shares.into_iter().zip(balances))
        .map(|(area, (amount, balance))| {
            area.balance = balance;
            AreaDistribution {
                id: DistributionId::new(),
                commission_id: commission.id,
                area_id: area.id,
                amount,
                distributed_at: now,
            }
        })
        .collect();

    commission.mark_realized(now);
    Ok(distributions)
}
