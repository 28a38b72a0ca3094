//! Geocentric apparent position of the Sun and Greenwich sidereal time.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::{
    heliocentric::HeliocentricPosition,
    math::{normalize_degrees_360, polynomial},
    nutation::{calculate_ecliptic_mean_obliquity, calculate_ecliptic_true_obliquity, Nutation},
    time::{equation_of_time, JulianDate, J2000_EPOCH_JD},
};

/// Angular radius of the solar disc, degrees.
pub(crate) const SUN_RADIUS: f64 = 0.26667;

/// Aberration constant, arcseconds at 1 AU.
const ABERRATION_ARCSEC: f64 = 20.4898;

/// GMST polynomial in Julian centuries, degrees, ascending powers, without
/// the linear day term.
const SIDEREAL_TIME_COEFFS: [f64; 4] = [280.460_618_37, 0.0, 0.000_387_933, -1.0 / 38_710_000.0];
const SIDEREAL_DEGREES_PER_DAY: f64 = 360.985_647_366_29;

/// Sun mean longitude L₀ in Julian ephemeris millennia, ascending powers.
const SUN_MEAN_LONGITUDE_COEFFS: [f64; 6] = [
    280.466_456_7,
    360_007.698_277_9,
    0.030_320_28,
    1.0 / 49_931.0,
    -1.0 / 15_300.0,
    -1.0 / 2_000_000.0,
];

/// Apparent geocentric position of the Sun and the sidereal time.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApparentPosition {
    /// Geocentric longitude Θ in degrees, [0, 360)
    pub geocentric_longitude: f64,
    /// Geocentric latitude β in degrees
    pub geocentric_latitude: f64,
    /// Mean obliquity of the ecliptic ε₀ in arcseconds
    pub mean_obliquity: f64,
    /// True obliquity of the ecliptic ε in degrees
    pub true_obliquity: f64,
    /// Aberration correction Δτ in degrees
    pub aberration: f64,
    /// Apparent sun longitude λ in degrees
    pub apparent_longitude: f64,
    /// Greenwich mean sidereal time ν₀ in degrees, [0, 360)
    pub mean_sidereal_time: f64,
    /// Greenwich apparent sidereal time ν in degrees
    pub apparent_sidereal_time: f64,
    /// Geocentric right ascension α in degrees, [0, 360)
    pub right_ascension: f64,
    /// Geocentric declination δ in degrees
    pub declination: f64,
}

/// Everything that depends only on the instant, not on the observer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Ephemeris {
    pub(crate) julian: JulianDate,
    pub(crate) heliocentric: HeliocentricPosition,
    pub(crate) nutation: Nutation,
    pub(crate) apparent: ApparentPosition,
}

impl Ephemeris {
    pub(crate) fn at(julian: JulianDate) -> Self {
        let heliocentric = HeliocentricPosition::at(julian.jme);
        let nutation = Nutation::at(julian.jce);

        // Earth seen from the Sun, turned around.
        let geocentric_longitude = normalize_degrees_360(heliocentric.longitude + 180.0);
        let geocentric_latitude = -heliocentric.latitude;

        let mean_obliquity = calculate_ecliptic_mean_obliquity(julian.jme);
        let true_obliquity = calculate_ecliptic_true_obliquity(nutation.obliquity, mean_obliquity);

        let aberration = -ABERRATION_ARCSEC / (3600.0 * heliocentric.radius);
        let apparent_longitude = geocentric_longitude + nutation.longitude + aberration;

        let mean_sidereal_time = greenwich_mean_sidereal_time(&julian);
        let apparent_sidereal_time = mean_sidereal_time + nutation.longitude * true_obliquity.to_radians().cos();

        let (right_ascension, declination) =
            ecliptic_to_equatorial(apparent_longitude, geocentric_latitude, true_obliquity);

        Self {
            julian,
            heliocentric,
            nutation,
            apparent: ApparentPosition {
                geocentric_longitude,
                geocentric_latitude,
                mean_obliquity,
                true_obliquity,
                aberration,
                apparent_longitude,
                mean_sidereal_time,
                apparent_sidereal_time,
                right_ascension,
                declination,
            },
        }
    }

    /// Equation of time in minutes for this instant.
    pub(crate) fn equation_of_time(&self) -> f64 {
        equation_of_time(
            sun_mean_longitude(self.julian.jme),
            self.apparent.right_ascension,
            self.nutation.longitude,
            self.apparent.true_obliquity,
        )
    }
}

/// L₀ in degrees, [0, 360).
fn sun_mean_longitude(jme: f64) -> f64 {
    normalize_degrees_360(polynomial(&SUN_MEAN_LONGITUDE_COEFFS, jme))
}

/// ν₀ in degrees, [0, 360). Uses UT (`jd`, `jc`), not ephemeris time.
fn greenwich_mean_sidereal_time(julian: &JulianDate) -> f64 {
    normalize_degrees_360(
        SIDEREAL_DEGREES_PER_DAY * (julian.jd - J2000_EPOCH_JD) + polynomial(&SIDEREAL_TIME_COEFFS, julian.jc),
    )
}

/// Converts ecliptic (λ, β) to equatorial (α, δ) for obliquity ε, all in
/// degrees. α is in [0, 360).
fn ecliptic_to_equatorial(longitude: f64, latitude: f64, obliquity: f64) -> (f64, f64) {
    let (sin_lambda, cos_lambda) = longitude.to_radians().sin_cos();
    let (sin_beta, cos_beta) = latitude.to_radians().sin_cos();
    let (sin_eps, cos_eps) = obliquity.to_radians().sin_cos();

    let right_ascension = (sin_lambda * cos_eps - (sin_beta / cos_beta) * sin_eps).atan2(cos_lambda);
    let declination = (sin_beta * cos_eps + cos_beta * sin_eps * sin_lambda).asin();

    (
        normalize_degrees_360(right_ascension.to_degrees()),
        declination.to_degrees(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nrel_ephemeris() -> Ephemeris {
        Ephemeris::at(JulianDate::from_julian_day(2_452_930.312_847_222, 67.0))
    }

    #[test]
    fn nrel_reference_apparent_position() {
        let apparent = nrel_ephemeris().apparent;
        let expected = [
            ("Θ", apparent.geocentric_longitude, 204.018_261_7),
            ("β", apparent.geocentric_latitude, 0.000_101_1),
            ("Δτ", apparent.aberration, -0.005_711_359),
            ("λ", apparent.apparent_longitude, 204.008_551_9),
            ("ν₀", apparent.mean_sidereal_time, 318.515_578_3),
            ("ν", apparent.apparent_sidereal_time, 318.511_909_8),
            ("α", apparent.right_ascension, 202.227_407_8),
            ("δ", apparent.declination, -9.314_340_1),
        ];
        for (name, value, reference) in expected {
            assert!((value - reference).abs() < 1e-6, "{name}: {value} vs {reference}");
        }
    }

    #[test]
    fn nrel_reference_equation_of_time() {
        let eot = nrel_ephemeris().equation_of_time();
        assert!((eot - 14.641_511).abs() < 1e-4, "eot = {eot}");
    }

    #[test]
    fn sun_mean_longitude_at_j2000() {
        assert!((sun_mean_longitude(0.0) - 280.466_456_7).abs() < 1e-9);
    }

    #[test]
    fn equinox_point_maps_to_zero_right_ascension() {
        let (alpha, delta) = ecliptic_to_equatorial(0.0, 0.0, 23.44);
        assert!(alpha.abs() < 1e-12 && delta.abs() < 1e-12);
        let (alpha, delta) = ecliptic_to_equatorial(90.0, 0.0, 23.44);
        assert!((alpha - 90.0).abs() < 1e-9);
        assert!((delta - 23.44).abs() < 1e-9);
    }

    #[test]
    fn equation_of_time_stays_small_through_the_year() {
        // Roughly -14.3 min in February to +16.4 min in November.
        for day in 0..366 {
            let jd = 2_460_310.5 + f64::from(day);
            let eot = Ephemeris::at(JulianDate::from_julian_day(jd, 69.0)).equation_of_time();
            assert!((-15.0..=17.0).contains(&eot), "day {day}: eot = {eot}");
        }
    }
}
