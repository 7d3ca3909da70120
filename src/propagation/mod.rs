//! Propagation of TLE records to state vectors
//!
//! Orbital mechanics live behind the [`Propagator`] trait: one operation turns a
//! [`TleRecord`] into an opaque model, the other evaluates that model at a
//! [`JulianDate`]. [`Sgp4Propagator`] implements it with the `sgp4` crate, and
//! [`PropagationAdapter`] turns raw propagator output into checked states in SI
//! units.

mod adapter;
mod sgp4_backend;

pub use adapter::{km_to_m, LoadedSatellite, PropagationAdapter, StateVector};
pub use sgp4_backend::{Sgp4Model, Sgp4Propagator};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::time::JulianDate;
use crate::tle::TleRecord;
use crate::Result;

/// Status code returned alongside every raw propagation result
///
/// Codes follow the conventional SGP4 numbering; 0 is the only nominal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropagationStatus(pub i32);

impl PropagationStatus {
    pub const NOMINAL: Self = Self(0);
    pub const MEAN_ECCENTRICITY_OUT_OF_RANGE: Self = Self(1);
    pub const NEGATIVE_MEAN_MOTION: Self = Self(2);
    pub const PERTURBED_ECCENTRICITY_OUT_OF_RANGE: Self = Self(3);
    pub const NEGATIVE_SEMI_LATUS_RECTUM: Self = Self(4);
    pub const DECAYED: Self = Self(6);

    pub fn code(&self) -> i32 {
        self.0
    }

    pub fn is_nominal(&self) -> bool {
        *self == Self::NOMINAL
    }

    /// Human readable meaning of the code
    pub fn description(&self) -> &'static str {
        match self.0 {
            0 => "nominal",
            1 => "mean eccentricity is outside the range 0 <= e < 1",
            2 => "mean motion has fallen below zero",
            3 => "perturbed eccentricity is outside the range 0 <= e <= 1",
            4 => "length of the orbit's semi-latus rectum has fallen below zero",
            6 => "orbit has decayed: computed position is underground",
            _ => "unknown propagation failure",
        }
    }
}

impl fmt::Display for PropagationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.description())
    }
}

/// Unconverted propagator output: status, position in km and velocity in km/s
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawState {
    pub status: PropagationStatus,
    pub position_km: [f64; 3],
    pub velocity_km_s: [f64; 3],
}

impl RawState {
    pub fn nominal(position_km: [f64; 3], velocity_km_s: [f64; 3]) -> Self {
        Self {
            status: PropagationStatus::NOMINAL,
            position_km,
            velocity_km_s,
        }
    }

    /// A failed result carrying no usable vectors
    pub fn failed(status: PropagationStatus) -> Self {
        Self {
            status,
            position_km: [f64::NAN; 3],
            velocity_km_s: [f64::NAN; 3],
        }
    }
}

/// A pluggable orbit propagator
pub trait Propagator {
    /// Opaque orbital model built from one TLE record
    type Model;

    /// Parse the element lines of `record` into a model
    ///
    /// Fails when the element lines are not valid TLE syntax.
    fn parse(&self, record: &TleRecord) -> Result<Self::Model>;

    /// Evaluate `model` at the given Julian date
    fn propagate(&self, model: &Self::Model, date: JulianDate) -> RawState;
}

impl<P: Propagator + ?Sized> Propagator for &P {
    type Model = P::Model;

    fn parse(&self, record: &TleRecord) -> Result<Self::Model> {
        (**self).parse(record)
    }

    fn propagate(&self, model: &Self::Model, date: JulianDate) -> RawState {
        (**self).propagate(model, date)
    }
}
