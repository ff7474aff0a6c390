pub mod grow;
pub mod schema;
pub mod simulate;

use anyhow::Context;
use finsim::simulate::{read_scenario_json, Scenario};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read a scenario file (or stdin with "-")
pub fn read_scenario(path: &Path) -> anyhow::Result<Scenario> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        read_from_file(path)
    }
}

fn read_from_file(path: &Path) -> anyhow::Result<Scenario> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let scenario = read_scenario_json(BufReader::new(file))
        .with_context(|| format!("reading scenario {}", path.display()))?;
    Ok(scenario)
}

fn read_from_stdin() -> anyhow::Result<Scenario> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe a scenario to stdin.");
    }

    let scenario = read_scenario_json(io::Cursor::new(buffer)).context("reading scenario from stdin")?;
    Ok(scenario)
}
