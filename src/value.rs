use crate::algebra::ordered::round_to_whole;
use crate::algebra::{Growable, Scalable};
use crate::money::Money;
use finsim_derive::CentsArithmetic;
use std::fmt;

/// A financial value independent of time, held in year-2000 U.S. cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, CentsArithmetic,
)]
pub struct Value(i64);

impl Value {
    pub const ZERO: Value = Value(0);

    /// The value of `money` at a point in time where costs have risen by
    /// `inflation_since_2000` (negative if they have fallen).
    pub fn of_inflated_money(money: Money, inflation_since_2000: f64) -> Value {
        Value(round_to_whole(
            money.all_cents() as f64 / (1.0 + inflation_since_2000),
        ))
    }

    /// How much money this value is worth after `inflation_since_2000`.
    pub fn inflate(&self, inflation_since_2000: f64) -> Money {
        Money::from_cents(round_to_whole(self.0 as f64 * (1.0 + inflation_since_2000)))
    }
}

impl Scalable for Value {
    fn times(&self, multiplier: i64) -> Self {
        *self * multiplier
    }

    fn checked_times(&self, multiplier: i64) -> Option<Self> {
        self.checked_mul(multiplier)
    }
}

impl Growable for Value {
    fn grow_and_round(&self, ratio: f64) -> Self {
        Value(round_to_whole(self.0 as f64 * ratio))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ 2000-01-01", Money::from_cents(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_inflated_money() {
        let money = Money::of(150, 0).unwrap();
        assert_eq!(Value::of_inflated_money(money, 0.5), Value(10000));
        assert_eq!(Value::of_inflated_money(money, 0.0), Value(15000));
        assert_eq!(Value::of_inflated_money(Money::from_cents(-300), 2.0), Value(-100));
    }

    #[test]
    fn inflate() {
        assert_eq!(Value(10000).inflate(0.5), Money::of(150, 0).unwrap());
        assert_eq!(Value(10000).inflate(-0.25), Money::of(75, 0).unwrap());
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Value(500) + Value(250), Value(750));
        assert_eq!(Value(500) - Value(750), Value(-250));
        assert_eq!(Value(500) * -2, Value(-1000));
        assert_eq!(Value(333).times(3), Value(999));
        assert_eq!(Value(333).checked_times(3), Some(Value(999)));
        assert_eq!(Value(i64::MIN).checked_times(-1), None);
    }

    #[test]
    fn display() {
        assert_eq!(Value(12345).to_string(), "$123.45 @ 2000-01-01");
        assert_eq!(Value::ZERO.to_string(), "$0.00 @ 2000-01-01");
    }
}
