//! Two-line element records and the catalog record locator
//!
//! Catalog text published by CelesTrak and similar services is a sequence of
//! three-line groups: a name line followed by the two element lines. This
//! module only finds records in such text. It does not look inside the element
//! lines; checksum and field parsing belong to the propagator.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Result, TlePropError};

/// A name line plus the two element lines that follow it in a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TleRecord {
    name: String,
    line1: String,
    line2: String,
}

impl TleRecord {
    pub fn new(name: impl Into<String>, line1: impl Into<String>, line2: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            line1: line1.into(),
            line2: line2.into(),
        }
    }

    /// The name line exactly as it appeared in the catalog
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line1(&self) -> &str {
        &self.line1
    }

    pub fn line2(&self) -> &str {
        &self.line2
    }

    /// The three lines in catalog order
    pub fn lines(&self) -> (&str, &str, &str) {
        (&self.name, &self.line1, &self.line2)
    }
}

impl fmt::Display for TleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", self.line1)?;
        write!(f, "{}", self.line2)
    }
}

/// Find the record for `name` in catalog `text`
///
/// The first line containing `name` (case-insensitive substring match) is the
/// name line and the next two lines are returned as the element lines.
pub fn locate_record(name: &str, text: &str) -> Result<TleRecord> {
    if name.trim().is_empty() {
        return Err(TlePropError::InvalidSatelliteName(name.to_string()));
    }

    let needle = name.to_uppercase();
    let lines: Vec<&str> = text.trim().lines().collect();

    let index = lines
        .iter()
        .position(|line| line.to_uppercase().contains(&needle))
        .ok_or_else(|| TlePropError::SatelliteNotFound(name.to_string()))?;

    match (lines.get(index + 1), lines.get(index + 2)) {
        (Some(line1), Some(line2)) => {
            log::debug!("Found '{}' at catalog line {}", name, index + 1);
            Ok(TleRecord::new(lines[index], *line1, *line2))
        }
        _ => Err(TlePropError::TruncatedRecord {
            name: name.to_string(),
            line: index + 1,
        }),
    }
}

/// Iterate over every complete three-line group in catalog `text`
///
/// A trailing group with fewer than three lines is skipped.
pub fn records(text: &str) -> impl Iterator<Item = TleRecord> + '_ {
    let lines: Vec<&str> = text.trim().lines().collect();
    let complete = lines.len() / 3;

    (0..complete).map(move |i| TleRecord::new(lines[3 * i], lines[3 * i + 1], lines[3 * i + 2]))
}
