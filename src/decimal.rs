//! Fixed-point monetary and percentage types.
//!
//! Uses `rust_decimal` internally with scale enforcement so that every amount
//! the user sees is exactly what the account adds up, with no floating-point
//! drift.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

/// A monetary amount that maintains exactly 2 decimal places.
///
/// Values are rounded half away from zero when normalized, so `"0.005"`
/// becomes `0.01` and `"0.004"` becomes `0.00`.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use money_watcher::Money;
///
/// let amount = Money::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Largest amount accepted from the console: one trillion.
    ///
    /// Sums of accepted amounts stay far below `Decimal::MAX`, so account
    /// arithmetic cannot overflow.
    pub const MAX: Self = Money(Decimal::from_parts(3_567_587_328, 232, 0, false, 0));

    /// Creates a new `Money` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized =
            value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        normalized.rescale(Self::SCALE);
        Money(normalized)
    }

    /// Creates an amount from a whole number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Money::new(Decimal::new(cents, Self::SCALE))
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if this value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns the share of `total` that this amount represents.
    ///
    /// A zero `total` yields `0.0%` rather than dividing by zero.
    pub fn percent_of(&self, total: Money) -> Percent {
        if total.is_zero() {
            return Percent(Decimal::ZERO);
        }
        Percent(self.0 / total.0 * Decimal::ONE_HUNDRED)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money::new(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money::new(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// A percentage displayed with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percent(Decimal);

impl Percent {
    /// Returns the value rounded to one decimal place, half away from zero.
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.rounded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_from_str_normalizes_scale() {
        assert_eq!(money("1").to_string(), "1.00");
        assert_eq!(money("1.5").to_string(), "1.50");
        assert_eq!(money("  2.25  ").to_string(), "2.25");
    }

    #[test]
    fn test_from_str_rounds_half_away_from_zero() {
        assert_eq!(money("0.005").to_string(), "0.01");
        assert_eq!(money("0.004").to_string(), "0.00");
        assert_eq!(money("-1.125").to_string(), "-1.13");
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!(Money::from_str("abc").is_err());
        assert!(Money::from_str("").is_err());
    }

    #[test]
    fn test_arithmetic_preserves_scale() {
        let a = money("1.5");
        let b = money("2.5");

        assert_eq!((a + b).to_string(), "4.00");
        assert_eq!((a - b).to_string(), "-1.00");

        let mut c = a;
        c += b;
        assert_eq!(c.to_string(), "4.00");
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Money::from_cents(1).to_string(), "0.01");
        assert_eq!(Money::from_cents(-250).to_string(), "-2.50");
        assert_eq!(Money::MAX, money("1000000000000"));
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let empty: Vec<Money> = Vec::new();
        assert!(empty.iter().sum::<Money>().is_zero());
    }

    #[test]
    fn test_sign_checks() {
        assert!(money("0.01").is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(!money("-3").is_positive());
    }

    #[test]
    fn test_percent_rounds_to_one_decimal() {
        let total = money("300");
        assert_eq!(money("200").percent_of(total).to_string(), "66.7%");
        assert_eq!(money("100").percent_of(total).to_string(), "33.3%");
        assert_eq!(total.percent_of(total).to_string(), "100.0%");
    }

    #[test]
    fn test_percent_of_zero_total() {
        assert_eq!(money("5").percent_of(Money::ZERO).to_string(), "0.0%");
    }
}
