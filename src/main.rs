use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser, Debug)]
#[command(name = "finsim", version, about = "Simulate personal finances")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scenario and show yearly balances
    Simulate(cmd::simulate::SimulateCommand),
    /// Compound a single amount over a number of periods
    Grow(cmd::grow::GrowCommand),
    /// Print the scenario input format
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Simulate(simulate) => simulate.exec(),
        Command::Grow(grow) => grow.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
