//! Console and JSON rendering of propagated satellites

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::propagation::StateVector;
use crate::time::{Epoch, JulianDate};
use crate::tle::TleRecord;
use crate::Result;

/// Outcome of one successfully propagated target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteReport {
    /// Name as requested, not as found in the catalog
    pub name: String,
    pub record: TleRecord,
    pub state: StateVector,
}

#[derive(Serialize)]
struct JsonSatellite<'a> {
    name: &'a str,
    tle: [&'a str; 3],
    position_m: [f64; 3],
    velocity_m_s: [f64; 3],
}

#[derive(Serialize)]
struct JsonReport<'a> {
    epoch: String,
    julian_date: JulianDate,
    satellites: Vec<JsonSatellite<'a>>,
}

fn format_vector(v: &Vector3<f64>) -> String {
    format!("[{:.3}, {:.3}, {:.3}]", v.x, v.y, v.z)
}

/// Human readable report: the TLE records first, then the converted states
pub fn render_text(reports: &[SatelliteReport]) -> String {
    let mut out = String::new();

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{} TLE:\n{}\n", report.name, report.record));
    }

    out.push_str("\n=== Propagated ECI States ===\n");
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} Position (m): {}\n",
            report.name,
            format_vector(&report.state.position)
        ));
        out.push_str(&format!(
            "{} Velocity (m/s): {}\n",
            report.name,
            format_vector(&report.state.velocity)
        ));
    }

    out
}

/// Machine readable report of the same content as [`render_text`]
pub fn render_json(reports: &[SatelliteReport], epoch: &Epoch) -> Result<String> {
    let document = JsonReport {
        epoch: epoch.to_string(),
        julian_date: epoch.julian_date(),
        satellites: reports
            .iter()
            .map(|r| {
                let (name_line, line1, line2) = r.record.lines();
                JsonSatellite {
                    name: &r.name,
                    tle: [name_line, line1, line2],
                    position_m: r.state.position.into(),
                    velocity_m_s: r.state.velocity.into(),
                }
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&document)?)
}
