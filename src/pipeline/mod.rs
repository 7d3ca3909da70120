//! Fetch, locate, parse and propagate a list of satellites
//!
//! All run parameters live in [`PipelineConfig`]; the catalog source and the
//! propagator are injected so a run can be made against stubs.

mod report;

pub use report::{render_json, render_text, SatelliteReport};

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{CELESTRAK_FENGYUN_1C_URL, CELESTRAK_STATIONS_URL, DEFAULT_TIMEOUT_S};
use crate::data::{fetch_tle, CatalogSource};
use crate::propagation::{PropagationAdapter, Propagator};
use crate::time::Epoch;
use crate::{Result, TlePropError};

/// A satellite name and the catalog URL to look it up in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatelliteTarget {
    pub name: String,
    pub catalog_url: String,
}

impl SatelliteTarget {
    pub fn new(name: impl Into<String>, catalog_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            catalog_url: catalog_url.into(),
        }
    }
}

impl FromStr for SatelliteTarget {
    type Err = TlePropError;

    /// Parses `NAME=URL`; the split happens at the first `=` so query strings survive
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('=') {
            Some((name, url)) if !name.trim().is_empty() && !url.trim().is_empty() => {
                Ok(SatelliteTarget::new(name.trim(), url.trim()))
            }
            _ => Err(TlePropError::InvalidTarget(s.to_string())),
        }
    }
}

impl fmt::Display for SatelliteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.catalog_url)
    }
}

/// 2025-10-16 12:00:00 UTC
const DEFAULT_EPOCH: Epoch = Epoch::from_components(2025, 10, 16, 12, 0, 0.0);

/// Parameters of one run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub targets: Vec<SatelliteTarget>,
    pub epoch: Epoch,
    /// Timeout for each catalog request
    pub timeout: Duration,
}

impl Default for PipelineConfig {
    /// The ISS and a Fengyun 1C debris fragment at 2025-10-16 12:00:00 UTC
    fn default() -> Self {
        Self {
            targets: vec![
                SatelliteTarget::new("ISS (ZARYA)", CELESTRAK_STATIONS_URL),
                SatelliteTarget::new("FENGYUN 1C DEB", CELESTRAK_FENGYUN_1C_URL),
            ],
            epoch: DEFAULT_EPOCH,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_S),
        }
    }
}

/// A catalog source and a propagator wired together
pub struct Pipeline<C, P> {
    catalog: C,
    adapter: PropagationAdapter<P>,
}

impl<C: CatalogSource, P: Propagator> Pipeline<C, P> {
    pub fn new(catalog: C, propagator: P) -> Self {
        Self {
            catalog,
            adapter: PropagationAdapter::new(propagator),
        }
    }

    /// Run every target of `config` in order
    ///
    /// The first failure ends the run; no partial results are returned.
    pub fn run(&self, config: &PipelineConfig) -> Result<Vec<SatelliteReport>> {
        log::info!(
            "Propagating {} satellite(s) to {}",
            config.targets.len(),
            config.epoch
        );

        // every record is located before any propagation, as the report lists TLEs first
        let records = config
            .targets
            .iter()
            .map(|target| fetch_tle(&target.name, &target.catalog_url, &self.catalog))
            .collect::<Result<Vec<_>>>()?;

        config
            .targets
            .iter()
            .zip(records)
            .map(|(target, record)| -> Result<SatelliteReport> {
                let satellite = self.adapter.load(record)?;
                let state = self.adapter.state_at(&satellite, &config.epoch)?;
                Ok(SatelliteReport {
                    name: target.name.clone(),
                    record: satellite.into_record(),
                    state,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StaticCatalog;
    use crate::propagation::{PropagationStatus, RawState};
    use crate::time::JulianDate;
    use crate::tle::TleRecord;
    use nalgebra::Vector3;
    use std::cell::Cell;

    const CATALOG: &str = "ISS (ZARYA)\nline1\nline2\nOTHER SAT\nlineA\nlineB";

    /// Fails every satellite whose element line 1 equals `failing_line`
    struct StubPropagator {
        failing_line: &'static str,
        calls: Cell<usize>,
    }

    impl StubPropagator {
        fn new(failing_line: &'static str) -> Self {
            Self {
                failing_line,
                calls: Cell::new(0),
            }
        }
    }

    impl Propagator for StubPropagator {
        type Model = bool;

        fn parse(&self, record: &TleRecord) -> Result<bool> {
            Ok(record.line1() != self.failing_line)
        }

        fn propagate(&self, healthy: &bool, _date: JulianDate) -> RawState {
            self.calls.set(self.calls.get() + 1);
            if *healthy {
                RawState::nominal([7000.0, 0.0, 0.0], [0.0, 7.5, 0.0])
            } else {
                RawState::failed(PropagationStatus::DECAYED)
            }
        }
    }

    fn config(names: &[&str]) -> PipelineConfig {
        PipelineConfig {
            targets: names
                .iter()
                .map(|n| SatelliteTarget::new(*n, "https://celestrak.example/stations.txt"))
                .collect(),
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.targets.len(), 2);
        assert_eq!(config.targets[0].name, "ISS (ZARYA)");
        assert_eq!(config.targets[1].name, "FENGYUN 1C DEB");
        assert_eq!(config.epoch, Epoch::new(2025, 10, 16, 12, 0, 0.0).unwrap());
        assert_eq!(config.epoch.to_string(), "2025-10-16T12:00:00.000Z");
        assert_eq!(config.epoch.julian_date(), JulianDate::new(2460964.5, 0.5));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_target_parsing() {
        let target: SatelliteTarget =
            "FENGYUN 1C DEB=https://celestrak.org/gp.php?GROUP=fengyun-1c-debris&FORMAT=tle"
                .parse()
                .unwrap();
        assert_eq!(target.name, "FENGYUN 1C DEB");
        assert_eq!(
            target.catalog_url,
            "https://celestrak.org/gp.php?GROUP=fengyun-1c-debris&FORMAT=tle"
        );
        assert_eq!(target.to_string().parse::<SatelliteTarget>().unwrap(), target);

        assert!("no separator".parse::<SatelliteTarget>().is_err());
        assert!("=https://x".parse::<SatelliteTarget>().is_err());
        assert!("NAME=".parse::<SatelliteTarget>().is_err());
    }

    #[test]
    fn test_run_converts_all_targets() {
        let pipeline = Pipeline::new(StaticCatalog::new(CATALOG), StubPropagator::new("never"));
        let reports = pipeline.run(&config(&["iss", "other sat"])).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].name, "iss");
        assert_eq!(reports[0].record.name(), "ISS (ZARYA)");
        assert_eq!(reports[1].record.line2(), "lineB");
        for report in &reports {
            assert_eq!(report.state.position, Vector3::new(7_000_000.0, 0.0, 0.0));
            assert_eq!(report.state.velocity, Vector3::new(0.0, 7500.0, 0.0));
        }
    }

    #[test]
    fn test_lookup_failure_aborts_before_propagation() {
        let propagator = StubPropagator::new("never");
        let pipeline = Pipeline::new(StaticCatalog::new(CATALOG), &propagator);
        let err = pipeline.run(&config(&["iss", "NOSAT"])).unwrap_err();

        assert!(matches!(err, TlePropError::SatelliteNotFound(ref n) if n == "NOSAT"));
        assert_eq!(propagator.calls.get(), 0);
    }

    #[test]
    fn test_propagation_failure_names_satellite() {
        let pipeline = Pipeline::new(StaticCatalog::new(CATALOG), StubPropagator::new("lineA"));
        let err = pipeline.run(&config(&["iss", "other sat"])).unwrap_err();

        match err {
            TlePropError::PropagationError {
                satellite, status, ..
            } => {
                assert_eq!(satellite, "OTHER SAT");
                assert_eq!(status, 6);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
