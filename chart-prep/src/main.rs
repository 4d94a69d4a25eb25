use anyhow::Context;
use chart_prep::prepare;
use schema::ChartSpec;
use serde::Serialize;
use std::io::stdin;

fn main() -> anyhow::Result<()> {
    let input: ChartSpec =
        serde_json::from_reader(stdin()).context("Failed to deserialize the input as JSON")?;
    let output = prepare(input)?;
    emit(&output)
}

fn emit(report: impl Serialize) -> anyhow::Result<()> {
    let json =
        serde_json::to_string_pretty(&report).context("Failed to serialize the report as JSON")?;
    println!("{json}");
    Ok(())
}
