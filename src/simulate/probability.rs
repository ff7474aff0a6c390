use super::{Result, SimulationError};
use rust_decimal::Decimal;
use std::ops::Mul;

/// The probability of an event, where 0 is 0% and 1 is 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Probability(Decimal);

impl Probability {
    pub const ZERO: Probability = Probability(Decimal::ZERO);
    pub const ONE: Probability = Probability(Decimal::ONE);

    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(SimulationError::InvalidProbability(value));
        }
        Ok(Probability(value))
    }

    /// This probability in the range 0-1.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The probability of either of two disjoint events.
    pub fn either(self, other: Probability) -> Result<Probability> {
        Probability::new(self.0 + other.0)
    }

    /// The probability of both of two independent events.
    pub fn both(self, other: Probability) -> Probability {
        Probability(self.0 * other.0)
    }

    /// The probability of this event not happening.
    pub fn complement(self) -> Probability {
        Probability(Decimal::ONE - self.0)
    }
}

impl Mul for Probability {
    type Output = Probability;

    fn mul(self, rhs: Probability) -> Probability {
        self.both(rhs)
    }
}
