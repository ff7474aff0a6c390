//! Compounding helpers for money and other growable values.

use super::{Result, SimulationError};
use crate::algebra::Growable;

fn ensure_positive(number: f64, description: &'static str) -> Result<()> {
    // also rejects NaN
    if number > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::NonPositiveGrowthRate {
            description,
            value: number,
        })
    }
}

/// Amount obtained by continuously adding `accumulation_rate` each time period
/// for `time` periods, compounding everything at `growth_rate`.
///
/// A `growth_rate` of 1.0 means no change.
pub fn accumulate_and_grow<T: Growable>(
    accumulation_rate: T,
    growth_rate: f64,
    time: i32,
) -> Result<T> {
    ensure_positive(growth_rate, "growth_rate")?;

    if growth_rate == 1.0 {
        return accumulation_rate
            .checked_times(i64::from(time))
            .ok_or_else(|| SimulationError::AccumulationOverflow {
                amount: accumulation_rate.to_string(),
                time,
            });
    }

    Ok(accumulation_rate
        .grow_and_round((growth_rate.powf(f64::from(time)) - 1.0) / growth_rate.ln()))
}

/// `principal` compounded at `growth_rate` for `time` periods.
pub fn grow<T: Growable>(principal: T, growth_rate: f64, time: i32) -> Result<T> {
    ensure_positive(growth_rate, "growth_rate")?;

    Ok(principal.grow_and_round(growth_rate.powf(f64::from(time))))
}
