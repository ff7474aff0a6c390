//! Capabilities required of range endpoints and distribution values.

use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, Sub};

/// A type usable as a range endpoint or distribution domain point.
///
/// The order only has to be total over the values actually used: a bound that
/// is not comparable with itself (a NaN float) is rejected when building a
/// [`Range`](super::Range).
pub trait Ordered: PartialOrd + Clone + fmt::Debug + fmt::Display {}

impl<T> Ordered for T where T: PartialOrd + Clone + fmt::Debug + fmt::Display {}

/// A value that can be summed, subtracted and scaled by a whole number.
///
/// Implementations must have value semantics: operations return new values
/// and never mutate their operands.
pub trait Scalable: Ordered + Add<Output = Self> + Sub<Output = Self> {
    /// Multiplies this value by an integer.
    ///
    /// Integer-backed values panic on overflow like the integers themselves.
    fn times(&self, multiplier: i64) -> Self;

    /// Multiplies this value by an integer, or `None` if the result does not
    /// fit.
    fn checked_times(&self, multiplier: i64) -> Option<Self>;
}

/// A [`Scalable`] value that can also be multiplied by a real ratio,
/// rounding to its smallest unit.
pub trait Growable: Scalable {
    /// Multiplies this value by `ratio`, rounding half to even.
    fn grow_and_round(&self, ratio: f64) -> Self;
}

impl Scalable for i64 {
    fn times(&self, multiplier: i64) -> Self {
        self * multiplier
    }

    fn checked_times(&self, multiplier: i64) -> Option<Self> {
        self.checked_mul(multiplier)
    }
}

impl Growable for i64 {
    fn grow_and_round(&self, ratio: f64) -> Self {
        round_to_whole(*self as f64 * ratio)
    }
}

impl Scalable for f64 {
    fn times(&self, multiplier: i64) -> Self {
        self * multiplier as f64
    }

    fn checked_times(&self, multiplier: i64) -> Option<Self> {
        let product = self.times(multiplier);
        (product.is_finite() || !self.is_finite()).then_some(product)
    }
}

impl Scalable for Decimal {
    fn times(&self, multiplier: i64) -> Self {
        self * Decimal::from(multiplier)
    }

    fn checked_times(&self, multiplier: i64) -> Option<Self> {
        self.checked_mul(Decimal::from(multiplier))
    }
}

/// Rounds to the nearest whole number, ties to even.
pub(crate) fn round_to_whole(amount: f64) -> i64 {
    amount.round_ties_even() as i64
}
