use super::{Result, SimulationError};
use crate::algebra::{Bound, Distribution, Range};
use crate::money::{Money, MoneyError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Input root for a simulation scenario
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Scenario {
    /// First simulated year (inclusive)
    pub start_year: i32,
    /// Year the simulation stops before (exclusive)
    pub end_year: i32,
    /// Accounts to simulate, each growing independently
    #[serde(default)]
    pub accounts: Vec<AccountInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AccountInput {
    /// Display name of the account (e.g., "401k", "savings")
    pub name: String,
    /// Balance at the start of the first simulated year, in dollars
    #[schemars(with = "f64")]
    pub opening_balance: Decimal,
    /// Yearly growth ratio: 1.0 means no change, 1.05 means 5% growth
    #[serde(default = "default_growth_rate")]
    pub growth_rate: f64,
    /// Money paid into the account over time
    #[serde(default)]
    pub contributions: Vec<ContributionInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ContributionInput {
    /// Amount paid in each period, in dollars
    #[schemars(with = "f64")]
    pub amount: Decimal,
    /// Number of payments per year (e.g., 12 for monthly)
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: i64,
    /// First day the contribution applies (inclusive); unbounded if missing
    #[serde(default)]
    pub from: Option<NaiveDate>,
    /// Day the contribution stops (exclusive); unbounded if missing
    #[serde(default)]
    pub until: Option<NaiveDate>,
}

fn default_growth_rate() -> f64 {
    1.0
}

fn default_periods_per_year() -> i64 {
    1
}

/// Daily payments are the most frequent schedule accepted.
pub const MAX_PERIODS_PER_YEAR: i64 = 366;

impl ContributionInput {
    /// The dates over which this contribution is paid.
    pub fn range(&self) -> Result<Range<NaiveDate>> {
        let start = self.from.map_or(Bound::NegativeInfinity, Bound::Finite);
        let end = self.until.map_or(Bound::PositiveInfinity, Bound::Finite);
        Ok(Range::new(start, end)?)
    }

    /// Total paid in over a year of the contribution's dates.
    pub fn yearly_amount(&self) -> Result<Money> {
        if !(1..=MAX_PERIODS_PER_YEAR).contains(&self.periods_per_year) {
            return Err(SimulationError::InvalidPeriodsPerYear {
                value: self.periods_per_year,
                max: MAX_PERIODS_PER_YEAR,
            });
        }
        let amount = Money::from_decimal(self.amount)?;
        amount
            .checked_mul(self.periods_per_year)
            .ok_or_else(|| MoneyError::Overflow(format!("{} x {}", amount, self.periods_per_year)).into())
    }

    /// Yearly contribution by date: the per-period amount times the number of
    /// periods inside the contribution's dates, zero elsewhere.
    pub fn schedule(&self) -> Result<Distribution<NaiveDate, Money>> {
        self.yearly_amount()?;
        let yearly = Distribution::constant(Money::from_decimal(self.amount)?) * self.periods_per_year;
        let active = yearly.restrict(self.range()?)?;
        Ok(active.defaulting_to(Distribution::constant(Money::ZERO))?)
    }
}

impl AccountInput {
    /// Sum of all contribution schedules for this account.
    ///
    /// Fails if the contributions together could exceed the range of whole
    /// cents in any year.
    pub fn contribution_schedule(&self) -> Result<Distribution<NaiveDate, Money>> {
        let mut ceiling: i64 = 0;
        for contribution in &self.contributions {
            ceiling = contribution
                .yearly_amount()?
                .all_cents()
                .checked_abs()
                .and_then(|cents| ceiling.checked_add(cents))
                .ok_or_else(|| MoneyError::Overflow(format!("yearly contributions to {}", self.name)))?;
        }
        self.contributions
            .iter()
            .try_fold(Distribution::constant(Money::ZERO), |total, contribution| {
                Ok(total + contribution.schedule()?)
            })
    }
}

/// Read a scenario from JSON
pub fn read_scenario_json<R: Read>(reader: R) -> serde_json::Result<Scenario> {
    serde_json::from_reader(reader)
}
