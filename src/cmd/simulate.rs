//! Simulate command - yearly account balances for a scenario

use crate::cmd::read_scenario;
use clap::Args;
use finsim::simulate::{Simulation, YearRecord};
use finsim::Money;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct SimulateCommand {
    /// Scenario JSON file. Reads from stdin if not specified.
    #[arg(short, long, default_value = "-")]
    scenario: PathBuf,

    /// Override the first simulated year
    #[arg(long)]
    start: Option<i32>,

    /// Override the year the simulation stops before
    #[arg(long)]
    end: Option<i32>,

    /// Only show this account
    #[arg(short, long)]
    account: Option<String>,

    /// Output as CSV instead of formatted table
    #[arg(long, conflicts_with = "json")]
    csv: bool,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

/// Row for the simulation table output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct YearRow {
    #[tabled(rename = "Year")]
    pub year: i32,

    #[tabled(rename = "Account")]
    pub account: String,

    #[tabled(rename = "Contribution")]
    pub contribution: String,

    #[tabled(rename = "Balance")]
    pub balance: String,
}

impl From<&YearRecord> for YearRow {
    fn from(record: &YearRecord) -> Self {
        YearRow {
            year: record.year,
            account: record.account.clone(),
            contribution: record.contribution.to_string(),
            balance: record.balance.to_string(),
        }
    }
}

/// JSON output structure
#[derive(Debug, Serialize)]
struct SimulationOutput {
    start_year: i32,
    end_year: i32,
    final_balances: BTreeMap<String, String>,
    years: Vec<YearRow>,
}

impl SimulateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let mut scenario = read_scenario(&self.scenario)?;
        if let Some(start) = self.start {
            scenario.start_year = start;
        }
        if let Some(end) = self.end {
            scenario.end_year = end;
        }

        let simulation = Simulation::from_scenario(&scenario)?;
        let records: Vec<YearRecord> = simulation
            .run()?
            .into_iter()
            .filter(|r| self.account.as_deref().is_none_or(|a| r.account == a))
            .collect();
        log::info!("Simulated {} account-year(s)", records.len());

        let rows: Vec<YearRow> = records.iter().map(YearRow::from).collect();
        if self.csv {
            self.write_csv(&rows)
        } else if self.json {
            self.print_json(scenario.start_year, scenario.end_year, &records, rows)
        } else {
            self.print_table(&records, &rows);
            Ok(())
        }
    }

    fn print_table(&self, records: &[YearRecord], rows: &[YearRow]) {
        if rows.is_empty() {
            println!("No simulated years");
            return;
        }

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);

        println!();
        for (account, balance) in final_balances(records) {
            println!("{:20} {:>16}", account, balance.to_string());
        }
    }

    fn write_csv(&self, rows: &[YearRow]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn print_json(
        &self,
        start_year: i32,
        end_year: i32,
        records: &[YearRecord],
        rows: Vec<YearRow>,
    ) -> anyhow::Result<()> {
        let output = SimulationOutput {
            start_year,
            end_year,
            final_balances: final_balances(records)
                .into_iter()
                .map(|(account, balance)| (account, balance.to_string()))
                .collect(),
            years: rows,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}

/// Last balance of each account, keyed by account name
fn final_balances(records: &[YearRecord]) -> BTreeMap<String, Money> {
    records
        .iter()
        .map(|r| (r.account.clone(), r.balance))
        .collect()
}
