//! Earth heliocentric position from the VSOP87 series.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::{
    math::normalize_degrees_360,
    periodic::evaluate_series,
    terms::{B_TERMS, L_TERMS, R_TERMS},
};

/// Earth's position relative to the Sun at one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeliocentricPosition {
    /// Heliocentric longitude L in degrees, [0, 360).
    pub longitude: f64,
    /// Heliocentric latitude B in degrees.
    pub latitude: f64,
    /// Earth radius vector R in astronomical units.
    pub radius: f64,
}

impl HeliocentricPosition {
    /// Evaluates all three series at `jme` (Julian ephemeris millennium).
    pub(crate) fn at(jme: f64) -> Self {
        Self {
            longitude: calculate_earth_heliocentric_longitude(jme),
            latitude: calculate_earth_heliocentric_latitude(jme),
            radius: calculate_earth_radius_vector(jme),
        }
    }
}

/// Earth's heliocentric longitude in degrees, [0, 360).
pub(crate) fn calculate_earth_heliocentric_longitude(julian_millennium: f64) -> f64 {
    normalize_degrees_360(evaluate_series(&L_TERMS, julian_millennium).to_degrees())
}

/// Earth's heliocentric latitude in degrees.
pub(crate) fn calculate_earth_heliocentric_latitude(julian_millennium: f64) -> f64 {
    evaluate_series(&B_TERMS, julian_millennium).to_degrees()
}

/// Earth-Sun distance in AU.
pub(crate) fn calculate_earth_radius_vector(julian_millennium: f64) -> f64 {
    evaluate_series(&R_TERMS, julian_millennium)
}
