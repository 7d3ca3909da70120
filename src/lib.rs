//! tleprop: fetch two-line element sets and propagate them with SGP4
//!
//! This crate retrieves TLE records for named satellites from a public catalog
//! service, hands them to an SGP4 propagator and reports the resulting
//! Earth-centered inertial position and velocity in meters and meters per second.
//!
//! ```no_run
//! use tleprop::data::HttpCatalog;
//! use tleprop::pipeline::{render_text, Pipeline, PipelineConfig};
//! use tleprop::propagation::Sgp4Propagator;
//!
//! let config = PipelineConfig::default();
//! let catalog = HttpCatalog::with_timeout(config.timeout)?;
//! let pipeline = Pipeline::new(catalog, Sgp4Propagator::new());
//! print!("{}", render_text(&pipeline.run(&config)?));
//! # Ok::<(), tleprop::TlePropError>(())
//! ```

use thiserror::Error;

pub mod constants;
pub mod data;
pub mod pipeline;
pub mod propagation;
pub mod time;
pub mod tle;

// Re-export commonly used types
pub use data::{fetch_tle, CatalogSource, FileCatalog, HttpCatalog, StaticCatalog};
pub use pipeline::{Pipeline, PipelineConfig, SatelliteReport, SatelliteTarget};
pub use propagation::{PropagationAdapter, Propagator, Sgp4Propagator, StateVector};
pub use time::{Epoch, JulianDate};
pub use tle::{locate_record, TleRecord};

/// Main error type for the tleprop library
#[derive(Debug, Error)]
pub enum TlePropError {
    #[error("Satellite {0} not found in TLE list")]
    SatelliteNotFound(String),

    #[error("TLE record for {name} is truncated: name line {line} is not followed by two element lines")]
    TruncatedRecord { name: String, line: usize },

    #[error("Invalid satellite name: '{0}'")]
    InvalidSatelliteName(String),

    #[error("Invalid satellite target '{0}', expected NAME=URL")]
    InvalidTarget(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("TLE parse error: {0}")]
    TleParseError(#[from] sgp4::TleError),

    #[error("SGP4 model error: {0}")]
    ModelError(#[from] sgp4::ElementsError),

    #[error("Propagation of {satellite} failed with status {status}: {reason}")]
    PropagationError {
        satellite: String,
        status: i32,
        reason: String,
    },

    #[error("Time error: {0}")]
    TimeError(#[from] time::TimeError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for tleprop operations
pub type Result<T> = std::result::Result<T, TlePropError>;
