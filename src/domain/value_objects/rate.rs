//! Commission rate value object
//!
//! The percentage of a referral's value a partner company pays as
//! commission. Always within `[1, 100]`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Commission percentage agreed with a company
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct CommissionRate(Decimal);

/// Error returned for rates outside `[1, 100]` or unparsable input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateError {
    #[error("commission percentage must be between 1 and 100, got {0}")]
    OutOfRange(Decimal),

    #[error("'{0}' is not a valid percentage")]
    NotANumber(String),
}

impl CommissionRate {
    pub fn new(percent: Decimal) -> Result<Self, RateError> {
        if percent < Decimal::ONE || percent > Decimal::ONE_HUNDRED {
            return Err(RateError::OutOfRange(percent));
        }
        Ok(Self(percent.normalize()))
    }

    /// The percentage, e.g. `15` for 15%
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for CommissionRate {
    type Error = RateError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CommissionRate> for Decimal {
    fn from(rate: CommissionRate) -> Self {
        rate.0
    }
}

impl FromStr for CommissionRate {
    type Err = RateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('%').trim();
        let percent =
            Decimal::from_str(trimmed).map_err(|_| RateError::NotANumber(s.to_string()))?;
        Self::new(percent)
    }
}

impl fmt::Display for CommissionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
