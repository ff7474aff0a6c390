//! Schema command - print the expected scenario format

use clap::Args;
use finsim::simulate::Scenario;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema or fields
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the scenario file
    JsonSchema,
    /// Field descriptions for the scenario file
    Fields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::Fields => self.print_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(Scenario);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_fields(&self) -> anyhow::Result<()> {
        println!("Scenario Format");
        println!("===============");
        println!();
        for (name, required, description) in SCENARIO_FIELD_DESCRIPTIONS {
            let req = if *required { "required" } else { "optional" };
            println!("{:36} ({:8})  {}", name, req, description);
        }
        println!();
        println!("Ranges are inclusive of `from` and exclusive of `until`");
        Ok(())
    }
}

const SCENARIO_FIELD_DESCRIPTIONS: &[(&str, bool, &str)] = &[
    ("start_year", true, "First simulated year"),
    ("end_year", true, "Year the simulation stops before"),
    ("accounts[].name", true, "Account name"),
    ("accounts[].opening_balance", true, "Opening balance in dollars"),
    (
        "accounts[].growth_rate",
        false,
        "Yearly growth ratio, 1.0 = no change (default 1.0)",
    ),
    ("accounts[].contributions[].amount", true, "Dollars paid per period"),
    (
        "accounts[].contributions[].periods_per_year",
        false,
        "Payments per year (default 1)",
    ),
    (
        "accounts[].contributions[].from",
        false,
        "First day paid, YYYY-MM-DD (default: always)",
    ),
    (
        "accounts[].contributions[].until",
        false,
        "Day payments stop, YYYY-MM-DD (default: forever)",
    ),
];
