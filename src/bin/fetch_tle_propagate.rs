//! TLE Fetch and Propagate Tool
//!
//! Downloads the TLE records of the requested satellites, propagates them with
//! SGP4 to a single epoch and prints ECI position (m) and velocity (m/s).
//!
//! Usage:
//!   cargo run --bin fetch_tle_propagate -- [--epoch 2025-10-16T12:00:00]
//!       [--satellite "ISS (ZARYA)=https://celestrak.org/NORAD/elements/stations.txt"]...

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{ArgAction, Parser};
use tleprop::constants::DEFAULT_TIMEOUT_S;
use tleprop::pipeline::{render_json, render_text};
use tleprop::{
    CatalogSource, Epoch, FileCatalog, HttpCatalog, Pipeline, PipelineConfig, SatelliteTarget,
    Sgp4Propagator,
};

/// TLE Fetch and Propagate Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Fetches satellite TLEs and propagates them to an epoch with SGP4",
    long_about = None
)]
struct Args {
    /// Satellite to propagate, as NAME=CATALOG_URL (repeatable).
    /// Defaults to ISS (ZARYA) and FENGYUN 1C DEB from CelesTrak
    #[arg(short, long = "satellite", value_name = "NAME=URL")]
    satellites: Vec<SatelliteTarget>,

    /// Propagation epoch in UTC
    #[arg(short, long, default_value = "2025-10-16T12:00:00")]
    epoch: Epoch,

    /// Read every catalog from this local TLE file instead of the network
    #[arg(long, value_name = "PATH")]
    catalog_file: Option<PathBuf>,

    /// Catalog request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_S)]
    timeout: u64,

    /// Print the report as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

impl Args {
    fn pipeline_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig {
            epoch: self.epoch,
            timeout: Duration::from_secs(self.timeout),
            ..PipelineConfig::default()
        };
        if !self.satellites.is_empty() {
            config.targets = self.satellites.clone();
        }
        config
    }
}

fn run(args: &Args) -> tleprop::Result<()> {
    let config = args.pipeline_config();

    let catalog: Box<dyn CatalogSource> = match &args.catalog_file {
        Some(path) => Box::new(FileCatalog::new(path)),
        None => Box::new(HttpCatalog::with_timeout(config.timeout)?),
    };

    let pipeline = Pipeline::new(catalog, Sgp4Propagator::new());
    let reports = pipeline.run(&config)?;

    if args.json {
        println!("{}", render_json(&reports, &config.epoch)?);
    } else {
        print!("{}", render_text(&reports));
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_run() {
        let args = Args::parse_from(["fetch_tle_propagate"]);
        assert_eq!(args.pipeline_config(), PipelineConfig::default());
        assert!(!args.json);
    }

    #[test]
    fn test_explicit_targets_replace_defaults() {
        let args = Args::parse_from([
            "fetch_tle_propagate",
            "--satellite",
            "NOAA 19=https://celestrak.org/NORAD/elements/weather.txt",
            "--epoch",
            "2024-01-01 00:00:00",
            "--timeout",
            "5",
            "--json",
        ]);
        let config = args.pipeline_config();

        assert_eq!(
            config.targets,
            vec![SatelliteTarget::new(
                "NOAA 19",
                "https://celestrak.org/NORAD/elements/weather.txt"
            )]
        );
        assert_eq!(config.epoch, Epoch::new(2024, 1, 1, 0, 0, 0.0).unwrap());
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(args.json);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(Args::try_parse_from(["fetch_tle_propagate", "--satellite", "no-separator"]).is_err());
        assert!(Args::try_parse_from(["fetch_tle_propagate", "--epoch", "yesterday"]).is_err());
    }
}
