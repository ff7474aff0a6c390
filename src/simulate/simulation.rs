use super::account::Account;
use super::growth::{accumulate_and_grow, grow};
use super::scenario::Scenario;
use super::{Result, SimulationError};
use crate::algebra::{Bound, Distribution, Range};
use crate::money::{Money, MoneyError};
use chrono::{Datelike, NaiveDate};

/// An account together with how it evolves each simulated year.
#[derive(Debug, Clone)]
pub struct AccountPlan {
    pub name: String,
    pub account: Account<Money>,
    pub growth_rate: f64,
    /// Yearly contribution, looked up on 1 January of each simulated year.
    pub contributions: Distribution<NaiveDate, Money>,
}

/// Balance of one account at the end of one simulated year
#[derive(Debug, Clone, PartialEq)]
pub struct YearRecord {
    pub year: i32,
    pub account: String,
    pub contribution: Money,
    pub balance: Money,
}

/// A yearly financial simulation.
#[derive(Debug, Clone)]
pub struct Simulation {
    years: Range<i32>,
    plans: Vec<AccountPlan>,
}

impl Simulation {
    /// Creates a simulation running from `start` (inclusive) until `end`
    /// (exclusive). Both years must be representable as calendar dates.
    pub fn new(start: i32, end: i32) -> Result<Self> {
        let calendar = NaiveDate::MIN.year()..=NaiveDate::MAX.year();
        for year in [start, end] {
            if !calendar.contains(&year) {
                return Err(SimulationError::YearOutOfRange(year));
            }
        }
        let years = Range::between(start, end).map_err(|_| SimulationError::InvalidYears { start, end })?;
        Ok(Simulation {
            years,
            plans: Vec::new(),
        })
    }

    pub fn from_scenario(scenario: &Scenario) -> Result<Self> {
        let mut simulation = Simulation::new(scenario.start_year, scenario.end_year)?;
        for input in &scenario.accounts {
            let plan = AccountPlan {
                name: input.name.clone(),
                account: Account::new(
                    Money::from_decimal(input.opening_balance).map_err(|e| SimulationError::from(e).for_account(&input.name))?,
                ),
                growth_rate: input.growth_rate,
                contributions: input
                    .contribution_schedule()
                    .map_err(|e| e.for_account(&input.name))?,
            };
            simulation = simulation.with_account(plan);
        }
        Ok(simulation)
    }

    pub fn with_account(mut self, plan: AccountPlan) -> Self {
        self.plans.push(plan);
        self
    }

    /// The simulated years.
    pub fn years(&self) -> &Range<i32> {
        &self.years
    }

    pub fn plans(&self) -> &[AccountPlan] {
        &self.plans
    }

    /// First simulated year and the year the simulation stops before.
    fn bounds(&self) -> (i32, i32) {
        match (self.years.start(), self.years.end()) {
            (Bound::Finite(start), Bound::Finite(end)) => (*start, *end),
            // `new` only builds finite years
            _ => (0, 0),
        }
    }

    /// Runs the simulation, returning one record per account per year.
    ///
    /// Each year the balance grows by the account's rate and the year's
    /// contribution is accumulated continuously alongside it.
    pub fn run(&self) -> Result<Vec<YearRecord>> {
        log::info!(
            "Simulating {} account(s) over {}",
            self.plans.len(),
            self.years
        );

        let (start, end) = self.bounds();
        let mut accounts: Vec<Account<Money>> = self.plans.iter().map(|p| p.account.clone()).collect();
        let mut records = Vec::new();

        for year in start..end {
            let new_year = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(SimulationError::YearOutOfRange(year))?;
            for (plan, account) in self.plans.iter().zip(accounts.iter_mut()) {
                let contribution = plan
                    .contributions
                    .value(&new_year)
                    .map_err(|e| SimulationError::from(e).for_account(&plan.name))?;
                let grown = grow(*account.balance(), plan.growth_rate, 1)
                    .map_err(|e| e.for_account(&plan.name))?;
                let accumulated = accumulate_and_grow(contribution, plan.growth_rate, 1)
                    .map_err(|e| e.for_account(&plan.name))?;
                let balance = grown.checked_add(accumulated).ok_or_else(|| {
                    SimulationError::from(MoneyError::Overflow(format!("{} + {}", grown, accumulated)))
                        .for_account(&plan.name)
                })?;
                account.apply(|_| balance);

                log::debug!(
                    "{} {}: contribution {}, balance {}",
                    year,
                    plan.name,
                    contribution,
                    account.balance()
                );

                records.push(YearRecord {
                    year,
                    account: plan.name.clone(),
                    contribution,
                    balance: *account.balance(),
                });
            }
        }

        Ok(records)
    }
}
