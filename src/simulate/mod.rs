pub mod account;
pub mod growth;
pub mod probability;
pub mod scenario;
pub mod simulation;

pub use account::Account;
pub use growth::{accumulate_and_grow, grow};
pub use probability::Probability;
pub use scenario::{read_scenario_json, AccountInput, ContributionInput, Scenario};
pub use simulation::{AccountPlan, Simulation, YearRecord};

use crate::money::MoneyError;
use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SimulationError {
    #[error("{description} must be positive but is {value}")]
    NonPositiveGrowthRate {
        description: &'static str,
        value: f64,
    },
    #[error("accumulating {amount} over {time} period(s) overflows")]
    AccumulationOverflow { amount: String, time: i32 },
    #[error("simulation start year {start} is after end year {end}")]
    InvalidYears { start: i32, end: i32 },
    #[error("year {0} is outside the supported calendar")]
    YearOutOfRange(i32),
    #[error("periods_per_year must be from 1 to {max}, got {value}")]
    InvalidPeriodsPerYear { value: i64, max: i64 },
    #[error("invalid probability {0}")]
    InvalidProbability(Decimal),
    #[error("account '{account}': {source}")]
    Account {
        account: String,
        #[source]
        source: Box<SimulationError>,
    },
    #[error(transparent)]
    Distribution(#[from] crate::algebra::Error),
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl SimulationError {
    /// Attaches the name of the account being processed.
    pub(crate) fn for_account(self, account: &str) -> SimulationError {
        SimulationError::Account {
            account: account.to_string(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
