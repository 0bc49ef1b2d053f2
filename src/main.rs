//! Duskline - print the solar phase for a day.
//!
//! Usage: duskline [OPTIONS]
//!
//! Options:
//!   --sunrise <TIME>   Civil twilight begin, e.g. "06:12:45 AM"
//!   --sunset <TIME>    Civil twilight end, e.g. "07:48:10 PM"
//!   --data <PATH>      Sunrise-sunset JSON payload (instead of --sunrise/--sunset)
//!   --now <TIME>       Current time, same format (default: local clock)
//!   --config <PATH>    Phase config JSON (default: built-in)
//!   --json             Print the snapshot as JSON

use std::path::PathBuf;
use std::process::ExitCode;

use duskline::core::{Error, Result, logging};
use duskline::phase::{PhaseConfig, SolarPhaseModel, SunriseSunsetResponse, TimeOfDay};

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<()> {
    let config = match parse_path_arg(args, "--config") {
        Some(path) => {
            log::info!("Loading config from {}", path.display());
            PhaseConfig::load(&path)?
        }
        None => PhaseConfig::default(),
    };

    let now = match parse_str_arg(args, "--now") {
        Some(s) => TimeOfDay::parse(&s, &config.time_format)?,
        None => TimeOfDay::now(),
    };

    let model = match parse_path_arg(args, "--data") {
        Some(path) => {
            log::info!("Reading sunrise-sunset data from {}", path.display());
            let data = SunriseSunsetResponse::load(&path)?.into_results();
            SolarPhaseModel::from_data_with(&config, &data, now)?
        }
        None => {
            let sunrise = parse_str_arg(args, "--sunrise").ok_or_else(|| missing("--sunrise"))?;
            let sunset = parse_str_arg(args, "--sunset").ok_or_else(|| missing("--sunset"))?;
            SolarPhaseModel::parse_with(&config, &sunrise, &sunset, now)?
        }
    };

    let snapshot = model.snapshot();
    if args.iter().any(|a| a == "--json") {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("sunrise         {:.4}  ({})", snapshot.sunrise_position, snapshot.sunrise_label);
        println!("sunset          {:.4}  ({})", snapshot.sunset_position, snapshot.sunset_label);
        println!("solar noon      {:.4}  ({})", snapshot.solar_noon, snapshot.solar_noon_label);
        println!("cycle offset    {:.4}", snapshot.cycle_offset);
        println!("twilight height {:.4}", snapshot.twilight_height);
        println!("sun position    {:.4}  ({})", snapshot.current_sun_position, snapshot.current_label);
    }

    Ok(())
}

fn missing(flag: &str) -> Error {
    Error::Usage(format!("missing {flag} (or pass --data <PATH>)"))
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_path_arg(args: &[String], flag: &str) -> Option<PathBuf> {
    parse_str_arg(args, flag).map(PathBuf::from)
}
