use crate::algebra::ordered::round_to_whole;
use crate::algebra::{Growable, Scalable};
use finsim_derive::CentsArithmetic;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

pub const CENTS_PER_DOLLAR: i64 = 100;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("cents must be from 0 to 99, got {0}")]
    InvalidCents(i64),
    #[error("amount does not fit in whole cents: {0}")]
    Overflow(String),
}

/// An amount of U.S. dollars, positive, negative or zero, held in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, CentsArithmetic,
)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates money from whole dollars and extra cents.
    ///
    /// Negative amounts use negative dollars and non-negative cents, so
    /// `Money::of(-4, 53)` is -$4.53.
    pub fn of(dollars: i64, cents: i64) -> Result<Money, MoneyError> {
        if !(0..CENTS_PER_DOLLAR).contains(&cents) {
            return Err(MoneyError::InvalidCents(cents));
        }
        let signed_cents = if dollars < 0 { -cents } else { cents };
        dollars
            .checked_mul(CENTS_PER_DOLLAR)
            .and_then(|whole| whole.checked_add(signed_cents))
            .map(Money)
            .ok_or_else(|| MoneyError::Overflow(format!("{}.{:02} dollars", dollars, cents)))
    }

    pub const fn from_cents(cents: i64) -> Money {
        Money(cents)
    }

    /// Converts a decimal dollar amount, rounding half to even to the cent.
    pub fn from_decimal(dollars: Decimal) -> Result<Money, MoneyError> {
        dollars
            .checked_mul(Decimal::from(CENTS_PER_DOLLAR))
            .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven))
            .and_then(|cents| cents.to_i64())
            .map(Money)
            .ok_or_else(|| MoneyError::Overflow(dollars.to_string()))
    }

    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Whole dollars, excluding cents. Truncates towards zero.
    pub fn truncated_dollars(&self) -> i64 {
        self.0 / CENTS_PER_DOLLAR
    }

    /// Cents beyond the whole dollars, always in `0..100` even when negative.
    pub fn extra_cents(&self) -> i64 {
        (self.0 % CENTS_PER_DOLLAR).abs()
    }

    pub fn all_cents(&self) -> i64 {
        self.0
    }
}

impl Scalable for Money {
    fn times(&self, multiplier: i64) -> Self {
        *self * multiplier
    }

    fn checked_times(&self, multiplier: i64) -> Option<Self> {
        self.checked_mul(multiplier)
    }
}

impl Growable for Money {
    fn grow_and_round(&self, ratio: f64) -> Self {
        Money(round_to_whole(self.0 as f64 * ratio))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.truncated_dollars().abs(),
            self.extra_cents()
        )
    }
}
