//! Grow command - compound a single amount

use clap::Args;
use finsim::simulate::{accumulate_and_grow, grow};
use finsim::Money;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct GrowCommand {
    /// Amount in dollars (e.g., 1500.25)
    #[arg(short, long, allow_hyphen_values = true)]
    amount: Decimal,

    /// Growth ratio per period: 1.0 means no change, 1.05 means 5% growth
    #[arg(short, long, default_value_t = 1.0)]
    rate: f64,

    /// Number of periods
    #[arg(short = 'n', long)]
    periods: i32,

    /// Treat the amount as paid in every period rather than once up front
    #[arg(long)]
    accumulate: bool,
}

impl GrowCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let amount = Money::from_decimal(self.amount)?;
        let result = if self.accumulate {
            accumulate_and_grow(amount, self.rate, self.periods)?
        } else {
            grow(amount, self.rate, self.periods)?
        };
        log::debug!(
            "{} at {} over {} period(s), accumulate = {}",
            amount,
            self.rate,
            self.periods,
            self.accumulate
        );
        println!("{}", result);
        Ok(())
    }
}
