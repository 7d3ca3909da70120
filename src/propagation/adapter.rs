//! Conversion of raw propagator output into checked SI state vectors

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::M_PER_KM;
use crate::time::Epoch;
use crate::tle::TleRecord;
use crate::{Result, TlePropError};

use super::Propagator;

/// Scale a kilometer (or km/s) vector to meters (or m/s)
pub fn km_to_m(v: Vector3<f64>) -> Vector3<f64> {
    v * M_PER_KM
}

/// Position in meters and velocity in meters per second, Earth-centered inertial
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

impl StateVector {
    /// Build a state from propagator output in km and km/s
    pub fn from_km(position_km: [f64; 3], velocity_km_s: [f64; 3]) -> Self {
        Self {
            position: km_to_m(Vector3::from(position_km)),
            velocity: km_to_m(Vector3::from(velocity_km_s)),
        }
    }
}

/// A located record together with the propagator model built from it
pub struct LoadedSatellite<M> {
    record: TleRecord,
    model: M,
}

impl<M> LoadedSatellite<M> {
    /// Name line with catalog padding removed
    pub fn name(&self) -> &str {
        self.record.name().trim()
    }

    pub fn record(&self) -> &TleRecord {
        &self.record
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn into_record(self) -> TleRecord {
        self.record
    }
}

/// Drives a [`Propagator`] and checks its status before converting units
pub struct PropagationAdapter<P> {
    propagator: P,
}

impl<P: Propagator> PropagationAdapter<P> {
    pub fn new(propagator: P) -> Self {
        Self { propagator }
    }

    pub fn propagator(&self) -> &P {
        &self.propagator
    }

    /// Build the propagator model for `record`, surfacing parse failures unchanged
    pub fn load(&self, record: TleRecord) -> Result<LoadedSatellite<P::Model>> {
        let model = self.propagator.parse(&record)?;
        Ok(LoadedSatellite { record, model })
    }

    /// State of `satellite` at `epoch` in meters and meters per second
    ///
    /// A non-nominal propagator status is an error and yields no vector.
    pub fn state_at(
        &self,
        satellite: &LoadedSatellite<P::Model>,
        epoch: &Epoch,
    ) -> Result<StateVector> {
        let raw = self
            .propagator
            .propagate(&satellite.model, epoch.julian_date());

        if !raw.status.is_nominal() {
            return Err(TlePropError::PropagationError {
                satellite: satellite.name().to_string(),
                status: raw.status.code(),
                reason: raw.status.description().to_string(),
            });
        }

        log::debug!("Propagated {} to {}", satellite.name(), epoch);
        Ok(StateVector::from_km(raw.position_km, raw.velocity_km_s))
    }
}
