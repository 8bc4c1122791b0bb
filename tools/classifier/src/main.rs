/// Station classification CLI: read one station's monthly normals from a
/// JSON file, print the Köppen-Geiger code and the statistics summary.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use koppen_core::{
    classify, compute_statistics, ClassificationResult, ClimateThresholds,
    Hemisphere, MonthlySeries,
};

#[derive(Parser, Debug)]
#[command(
    name = "classifier",
    about = "Classify station monthly normals under the Köppen-Geiger scheme"
)]
struct Args {
    /// Station JSON file with "hemisphere", "temperature_c" and
    /// "precipitation_mm" (12 values each, January first).
    #[arg(short, long)]
    input: String,

    /// Override the hemisphere recorded in the station file.
    #[arg(long)]
    hemisphere: Option<Hemisphere>,

    /// Print only the classification code.
    #[arg(long)]
    code_only: bool,
}

#[derive(Deserialize, Debug)]
struct StationRecord {
    #[serde(default)]
    name: Option<String>,
    hemisphere: Hemisphere,
    temperature_c: MonthlySeries,
    precipitation_mm: MonthlySeries,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input))?;
    let station: StationRecord = serde_json::from_str(&text)
        .with_context(|| format!("malformed station record in {}", args.input))?;
    let hemisphere = args.hemisphere.unwrap_or(station.hemisphere);

    let thresholds = ClimateThresholds::default();
    let statistics = compute_statistics(
        &station.temperature_c,
        &station.precipitation_mm,
        hemisphere,
        &thresholds,
    );
    let code = classify(&statistics, &thresholds)?;
    let result = ClassificationResult::new(code, statistics);

    if args.code_only {
        println!("{}", result.code);
    } else {
        let name = station.name.as_deref().unwrap_or("station");
        println!("{name}: {}", result.code);
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}
