//! Money value object
//!
//! Fixed-point decimal amount in the cooperative's single currency,
//! always carried with exactly two fractional digits. All commission
//! arithmetic goes through here so no binary floating point is involved.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::rate::CommissionRate;

/// A monetary amount with cent precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Number of fractional digits kept
    pub const SCALE: u32 = 2;

    /// Largest amount accepted as input, 10^15 in cents
    const MAX_CENTS: i64 = 100_000_000_000_000_000;

    /// Build from an arbitrary decimal, rounding half away from zero to cents
    pub fn new(amount: Decimal) -> Self {
        let mut rounded = amount.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::SCALE);
        Self(rounded)
    }

    pub fn zero() -> Self {
        Self::from_cents(0)
    }

    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, Self::SCALE))
    }

    /// Largest amount accepted for a parsed or user-supplied value
    pub fn max() -> Self {
        Self::from_cents(Self::MAX_CENTS)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `self × rate / 100`, rounded half away from zero to cents.
    ///
    /// Returns `None` when the product does not fit a decimal.
    pub fn percent(&self, rate: CommissionRate) -> Option<Money> {
        self.0
            .checked_mul(rate.value())
            .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
            .map(Money::new)
    }

    /// Split into two halves whose sum is exactly `self`.
    ///
    /// The first half is rounded toward zero; the odd cent, if any,
    /// lands in the second.
    pub fn split_half(&self) -> (Money, Money) {
        let first = Money::truncated(self.0 / Decimal::TWO);
        (first, *self - first)
    }

    /// Split into `parts` shares whose sum is exactly `self`.
    ///
    /// Each share is `self / parts` rounded toward zero; the residual
    /// cents are added to the first share. Returns an empty vector when
    /// `parts` is zero.
    pub fn allocate_evenly(&self, parts: usize) -> Vec<Money> {
        if parts == 0 {
            return Vec::new();
        }

        let count = Decimal::from(parts as u64);
        let share = Money::truncated(self.0 / count);
        let residual = self.0 - share.0 * count;

        let mut shares = vec![share; parts];
        shares[0] = Money::new(share.0 + residual);
        shares
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Ratio of `self` to `total` as a percentage with two decimals.
    ///
    /// Zero when `total` is zero or the ratio does not fit a decimal.
    pub fn percentage_of(&self, total: Money) -> Decimal {
        if total.is_zero() {
            return Decimal::ZERO;
        }
        self.0
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.checked_div(total.0))
            .map(|ratio| {
                ratio.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero)
            })
            .unwrap_or(Decimal::ZERO)
    }

    fn truncated(amount: Decimal) -> Money {
        let mut truncated = amount.round_dp_with_strategy(Self::SCALE, RoundingStrategy::ToZero);
        truncated.rescale(Self::SCALE);
        Money(truncated)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when parsing a monetary amount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' has more than two decimal places")]
    TooPrecise(String),

    #[error("'{0}' exceeds the largest accepted amount ({max})", max = Money::max())]
    TooLarge(String),
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let amount = Decimal::from_str(trimmed)
            .map_err(|_| MoneyParseError::NotANumber(trimmed.to_string()))?;
        if amount.normalize().scale() > Self::SCALE {
            return Err(MoneyParseError::TooPrecise(trimmed.to_string()));
        }
        if amount.abs() > Money::max().0 {
            return Err(MoneyParseError::TooLarge(trimmed.to_string()));
        }
        Ok(Money::new(amount))
    }
}
