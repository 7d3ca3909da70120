//! Constants module for catalog retrieval and propagation

// Units
/// Meters per kilometer, the factor between propagator output and reported states
pub const M_PER_KM: f64 = 1000.0;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Minutes in a day
pub const MINUTES_PER_DAY: f64 = 1_440.0;

// Earth constants
/// WGS-72 equatorial radius in kilometers, the radius SGP4 is built on
pub const EARTH_RADIUS_WGS72_KM: f64 = 6_378.135;

// Catalog defaults
/// CelesTrak list of crewed and uncrewed space stations
pub const CELESTRAK_STATIONS_URL: &str = "https://celestrak.org/NORAD/elements/stations.txt";
/// CelesTrak general perturbations query for the Fengyun 1C debris cloud
pub const CELESTRAK_FENGYUN_1C_URL: &str =
    "https://celestrak.org/NORAD/elements/gp.php?GROUP=fengyun-1c-debris&FORMAT=tle";

/// Request timeout applied to catalog downloads, in seconds
pub const DEFAULT_TIMEOUT_S: u64 = 30;
