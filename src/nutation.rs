//! Nutation in longitude and obliquity, and the obliquity of the ecliptic.
//!
//! Nutation is the periodic oscillation of Earth's rotation axis caused by the
//! pull of the Moon and Sun on the equatorial bulge. The series is the 63-term
//! IAU 1980 theory driven by five lunisolar arguments.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::{
    math::{eval_cubic, polynomial},
    periodic::sum_argument_series,
    terms::{PE_TERMS, Y_TERMS},
};

/// Coefficients of the series are in 0.0001″; this converts their sum to degrees.
const NUTATION_SCALE_FACTOR: f64 = 36_000_000.0;

/// Conversion factor from arcseconds to degrees
const ARCSECONDS_TO_DEGREES: f64 = 1.0 / 3600.0;

/// Mean obliquity in arcseconds as a polynomial in U = JME/10 (Laskar 1986).
const MEAN_OBLIQUITY_COEFFS: [f64; 11] = [
    84_381.448, -4_680.93, -1.55, 1_999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// Nutation values for one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nutation {
    /// Fundamental arguments X0..X4 in degrees:
    /// - X0: mean elongation of the Moon from the Sun
    /// - X1: mean anomaly of the Sun
    /// - X2: mean anomaly of the Moon
    /// - X3: Moon's argument of latitude
    /// - X4: longitude of the ascending node of the Moon's mean orbit
    pub arguments: [f64; 5],
    /// Nutation in longitude Δψ, degrees
    pub longitude: f64,
    /// Nutation in obliquity Δε, degrees
    pub obliquity: f64,
}

impl Nutation {
    /// Evaluates the series at `jce` (Julian ephemeris century).
    pub(crate) fn at(julian_century: f64) -> Self {
        let arguments = fundamental_arguments(julian_century);
        let (longitude, obliquity) = calculate_nutation_longitude_and_obliquity(julian_century, arguments);
        Self {
            arguments,
            longitude,
            obliquity,
        }
    }
}

/// Mean elongation of the Moon from the Sun (X0), degrees.
pub(crate) fn calculate_mean_elongation_moon_sun(julian_century: f64) -> f64 {
    eval_cubic(1.0 / 189_474.0, -0.001_914_2, 445_267.111_48, 297.850_36, julian_century)
}

/// Mean anomaly of the Sun (X1), degrees.
pub(crate) fn calculate_mean_anomaly_sun(julian_century: f64) -> f64 {
    eval_cubic(-1.0 / 300_000.0, -0.000_160_3, 35_999.050_34, 357.527_72, julian_century)
}

/// Mean anomaly of the Moon (X2), degrees.
pub(crate) fn calculate_mean_anomaly_moon(julian_century: f64) -> f64 {
    eval_cubic(1.0 / 56_250.0, 0.008_697_2, 477_198.867_398, 134.962_98, julian_century)
}

/// Moon's argument of latitude (X3), degrees.
pub(crate) fn calculate_argument_latitude_moon(julian_century: f64) -> f64 {
    eval_cubic(1.0 / 327_270.0, -0.003_682_5, 483_202.017_538, 93.271_91, julian_century)
}

/// Longitude of the ascending node of the Moon's mean orbit (X4), degrees.
pub(crate) fn calculate_ascending_longitude_moon(julian_century: f64) -> f64 {
    eval_cubic(1.0 / 450_000.0, 0.002_070_8, -1_934.136_261, 125.044_52, julian_century)
}

/// The five lunisolar arguments, in the column order of the nutation table.
pub(crate) fn fundamental_arguments(julian_century: f64) -> [f64; 5] {
    [
        calculate_mean_elongation_moon_sun(julian_century),
        calculate_mean_anomaly_sun(julian_century),
        calculate_mean_anomaly_moon(julian_century),
        calculate_argument_latitude_moon(julian_century),
        calculate_ascending_longitude_moon(julian_century),
    ]
}

/// Calculates nutation in longitude and obliquity.
///
/// Both sums are accumulated in one pass over the 63 rows, in table order.
///
/// # Returns
/// Tuple of (`nutation_in_longitude`, `nutation_in_obliquity`) in degrees
pub(crate) fn calculate_nutation_longitude_and_obliquity(
    julian_century: f64,
    fundamental_arguments: [f64; 5],
) -> (f64, f64) {
    let (sum_longitude, sum_obliquity) =
        sum_argument_series(&Y_TERMS, &PE_TERMS, &fundamental_arguments, julian_century);

    (
        sum_longitude / NUTATION_SCALE_FACTOR,
        sum_obliquity / NUTATION_SCALE_FACTOR,
    )
}

/// Mean obliquity of the ecliptic ε₀ in **arcseconds**.
///
/// # Arguments
/// * `julian_millennium` - Julian ephemeris millennium
pub(crate) fn calculate_ecliptic_mean_obliquity(julian_millennium: f64) -> f64 {
    polynomial(&MEAN_OBLIQUITY_COEFFS, julian_millennium / 10.0)
}

/// True obliquity of the ecliptic ε in degrees.
///
/// # Arguments
/// * `nutation_obliquity` - Nutation in obliquity Δε, degrees
/// * `mean_obliquity` - Mean obliquity ε₀, arcseconds
pub(crate) fn calculate_ecliptic_true_obliquity(nutation_obliquity: f64, mean_obliquity: f64) -> f64 {
    nutation_obliquity + mean_obliquity * ARCSECONDS_TO_DEGREES
}
