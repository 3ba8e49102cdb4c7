//! Integer money.
//!
//! Amounts are whole cents held in an `i64`, so totals never pick up
//! binary floating point drift.

use crate::utils::error::{Result, ShopError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(quantity)).map(Money)
    }

    /// Sums `amounts`, failing instead of wrapping.
    pub fn checked_sum<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, amount| acc.checked_add(amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = ShopError;

    /// Accepts `"4"`, `"3.5"`, `"3.50"` and an optional leading `$`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| ShopError::InvalidPrice {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let text = s.trim();
        let text = text.strip_prefix('$').unwrap_or(text);
        if text.is_empty() {
            return Err(invalid("price is empty"));
        }

        let (units, fraction) = match text.split_once('.') {
            Some((_, "")) => return Err(invalid("expected digits after the decimal point")),
            Some((units, fraction)) => (units, fraction),
            None => (text, ""),
        };

        if units.is_empty() || !units.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a non-negative decimal number"));
        }
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("at most two fractional digits are allowed"));
        }

        let units: i64 = units
            .parse()
            .map_err(|_| invalid("amount is too large"))?;
        let cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid("bad cents"))? * 10,
            _ => fraction.parse::<i64>().map_err(|_| invalid("bad cents"))?,
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Money)
            .ok_or_else(|| invalid("amount is too large"))
    }
}

impl TryFrom<String> for Money {
    type Error = ShopError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        let abs = value.0.unsigned_abs();
        let sign = if value.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
