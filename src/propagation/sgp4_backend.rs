//! SGP4/SDP4 backend built on the `sgp4` crate

use crate::constants::EARTH_RADIUS_WGS72_KM;
use crate::time::{Epoch, JulianDate};
use crate::tle::TleRecord;
use crate::Result;

use super::{PropagationStatus, Propagator, RawState};

/// Parsed elements and initialised SGP4 constants for one satellite
pub struct Sgp4Model {
    elements: sgp4::Elements,
    constants: sgp4::Constants,
    epoch: JulianDate,
}

impl Sgp4Model {
    /// NORAD catalog number from line 1
    pub fn norad_id(&self) -> u64 {
        self.elements.norad_id
    }

    /// Epoch of the element set
    pub fn epoch(&self) -> JulianDate {
        self.epoch
    }
}

/// [`Propagator`] backed by the `sgp4` crate (WGS-72 constants, improved mode)
#[derive(Debug, Clone, Copy, Default)]
pub struct Sgp4Propagator;

impl Sgp4Propagator {
    pub fn new() -> Self {
        Self
    }
}

fn status_for_error(error: &sgp4::Error) -> PropagationStatus {
    match error {
        sgp4::Error::OutOfRangeEccentricity { .. } => {
            PropagationStatus::MEAN_ECCENTRICITY_OUT_OF_RANGE
        }
        sgp4::Error::OutOfRangePerturbedEccentricity { .. } => {
            PropagationStatus::PERTURBED_ECCENTRICITY_OUT_OF_RANGE
        }
        sgp4::Error::NegativeSemiLatusRectum { .. } => {
            PropagationStatus::NEGATIVE_SEMI_LATUS_RECTUM
        }
    }
}

/// Status of a successful prediction; a radius inside the Earth means decayed
fn status_for_position(position_km: &[f64; 3]) -> PropagationStatus {
    let radius = position_km.iter().map(|c| c * c).sum::<f64>().sqrt();

    if radius < EARTH_RADIUS_WGS72_KM {
        PropagationStatus::DECAYED
    } else {
        PropagationStatus::NOMINAL
    }
}

impl Propagator for Sgp4Propagator {
    type Model = Sgp4Model;

    fn parse(&self, record: &TleRecord) -> Result<Sgp4Model> {
        // catalogs pad lines with trailing blanks, the element parser wants exact widths
        let elements = sgp4::Elements::from_tle(
            Some(record.name().trim().to_string()),
            record.line1().trim_end().as_bytes(),
            record.line2().trim_end().as_bytes(),
        )?;
        let constants = sgp4::Constants::from_elements(&elements)?;
        let epoch = Epoch::from_naive(&elements.datetime).julian_date();

        log::debug!(
            "Parsed elements for {} (NORAD {}), epoch JD {:.8}",
            record.name().trim(),
            elements.norad_id,
            epoch.value()
        );

        Ok(Sgp4Model {
            elements,
            constants,
            epoch,
        })
    }

    fn propagate(&self, model: &Sgp4Model, date: JulianDate) -> RawState {
        let minutes = date.minutes_since(&model.epoch);

        match model
            .constants
            .propagate(sgp4::MinutesSinceEpoch(minutes))
        {
            Ok(prediction) => RawState {
                status: status_for_position(&prediction.position),
                position_km: prediction.position,
                velocity_km_s: prediction.velocity,
            },
            Err(e) => {
                log::warn!(
                    "SGP4 failed for NORAD {} at {:.3} min from epoch: {}",
                    model.elements.norad_id,
                    minutes,
                    e
                );
                RawState::failed(status_for_error(&e))
            }
        }
    }
}
