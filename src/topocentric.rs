//! Observer-dependent part of the pipeline: parallax, local hour angle,
//! refraction, zenith and azimuth, and the incidence angle on a surface.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::{
    geo::{Ephemeris, SUN_RADIUS},
    math::normalize_degrees_360,
    types::{Atmosphere, Location, Surface},
};

const EARTH_EQUATORIAL_RADIUS_METERS: f64 = 6_378_140.0;
/// Polar over equatorial radius, b/a.
const EARTH_AXIS_RATIO: f64 = 0.996_647_19;
/// Solar parallax at 1 AU, arcseconds.
const SOLAR_PARALLAX_ARCSEC: f64 = 8.794;
/// Lowest elevation Bennett's formula is used at. Its `10.3 / (e + 5.11)`
/// term diverges at -5.11°.
const BENNETT_FLOOR: f64 = -5.0;

/// Position of the Sun as seen by the observer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopocentricPosition {
    /// Observer local hour angle H in degrees, [0, 360)
    pub hour_angle: f64,
    /// Sun equatorial horizontal parallax ξ in degrees
    pub equatorial_horizontal_parallax: f64,
    /// Parallax in right ascension Δα in degrees
    pub right_ascension_parallax: f64,
    /// Topocentric right ascension α′ in degrees
    pub right_ascension: f64,
    /// Topocentric declination δ′ in degrees
    pub declination: f64,
    /// Topocentric local hour angle H′ in degrees
    pub local_hour_angle: f64,
    /// Elevation e₀ without refraction, degrees
    pub elevation_uncorrected: f64,
    /// Refraction correction Δe in degrees
    pub refraction_correction: f64,
    /// Elevation e with refraction, degrees
    pub elevation: f64,
    /// Topocentric zenith angle θ in degrees
    pub zenith: f64,
    /// Azimuth measured westward from south, degrees [0, 360)
    pub azimuth_astro: f64,
    /// Azimuth measured eastward from north, degrees [0, 360)
    pub azimuth: f64,
}

impl TopocentricPosition {
    pub(crate) fn observe(ephemeris: &Ephemeris, location: &Location, atmosphere: &Atmosphere) -> Self {
        let apparent = &ephemeris.apparent;
        let hour_angle =
            normalize_degrees_360(apparent.apparent_sidereal_time + location.longitude - apparent.right_ascension);
        let equatorial_horizontal_parallax = equatorial_horizontal_parallax(ephemeris.heliocentric.radius);

        let shift = ParallaxShift::new(location, equatorial_horizontal_parallax, hour_angle, apparent.declination);
        let local_hour_angle = hour_angle - shift.right_ascension;

        let elevation_uncorrected = elevation_angle(location.latitude, shift.declination, local_hour_angle);
        let refraction_correction = refraction_correction(atmosphere, elevation_uncorrected);
        let elevation = elevation_uncorrected + refraction_correction;

        let azimuth_astro = azimuth_from_south(local_hour_angle, location.latitude, shift.declination);

        Self {
            hour_angle,
            equatorial_horizontal_parallax,
            right_ascension_parallax: shift.right_ascension,
            right_ascension: apparent.right_ascension + shift.right_ascension,
            declination: shift.declination,
            local_hour_angle,
            elevation_uncorrected,
            refraction_correction,
            elevation,
            zenith: 90.0 - elevation,
            azimuth_astro,
            azimuth: normalize_degrees_360(azimuth_astro + 180.0),
        }
    }

    /// Angle between the Sun and the normal of `surface`, degrees.
    pub(crate) fn incidence(&self, surface: &Surface) -> f64 {
        incidence_angle(self.zenith, self.azimuth_astro, surface)
    }
}

/// ξ in degrees for an Earth-Sun distance in AU.
pub(crate) fn equatorial_horizontal_parallax(radius: f64) -> f64 {
    SOLAR_PARALLAX_ARCSEC / (3600.0 * radius)
}

/// Geocentric-to-topocentric correction for one observer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct ParallaxShift {
    /// Topocentric declination δ′, degrees
    pub(crate) declination: f64,
    /// Parallax in right ascension Δα, degrees
    pub(crate) right_ascension: f64,
}

impl ParallaxShift {
    /// Shifts a geocentric declination seen at `hour_angle` to the
    /// observer's position on the flattened Earth.
    pub(crate) fn new(location: &Location, parallax: f64, hour_angle: f64, declination: f64) -> Self {
        let phi = location.latitude.to_radians();
        let height = location.elevation / EARTH_EQUATORIAL_RADIUS_METERS;

        // Reduced latitude u, then ρ·sin φ′ and ρ·cos φ′.
        let u = (EARTH_AXIS_RATIO * phi.tan()).atan();
        let y = EARTH_AXIS_RATIO * u.sin() + height * phi.sin();
        let x = u.cos() + height * phi.cos();

        let sin_xi = parallax.to_radians().sin();
        let (sin_h, cos_h) = hour_angle.to_radians().sin_cos();
        let (sin_delta, cos_delta) = declination.to_radians().sin_cos();

        let denominator = cos_delta - x * sin_xi * cos_h;
        let delta_alpha = (-x * sin_xi * sin_h).atan2(denominator);
        let delta_prime = ((sin_delta - y * sin_xi) * delta_alpha.cos()).atan2(denominator);

        Self {
            declination: delta_prime.to_degrees(),
            right_ascension: delta_alpha.to_degrees(),
        }
    }
}

/// Altitude above the horizon without refraction, degrees.
pub(crate) fn elevation_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let (sin_phi, cos_phi) = latitude.to_radians().sin_cos();
    let (sin_delta, cos_delta) = declination.to_radians().sin_cos();
    (sin_phi * sin_delta + cos_phi * cos_delta * hour_angle.to_radians().cos())
        .asin()
        .to_degrees()
}

/// Bennett's refraction scaled by pressure and temperature, degrees.
///
/// Zero once the upper limb is below the apparent horizon,
/// `-(SUN_RADIUS + atmos_refract)`, and never applied at or below
/// [`BENNETT_FLOOR`].
fn refraction_correction(atmosphere: &Atmosphere, elevation: f64) -> f64 {
    let apparent_horizon = -(SUN_RADIUS + atmosphere.atmos_refract);
    if elevation < apparent_horizon || elevation <= BENNETT_FLOOR {
        return 0.0;
    }
    let density = (atmosphere.pressure / 1010.0) * (283.0 / (273.0 + atmosphere.temperature));
    density * 1.02 / (60.0 * (elevation + 10.3 / (elevation + 5.11)).to_radians().tan())
}

/// Azimuth westward from south, degrees [0, 360).
fn azimuth_from_south(hour_angle: f64, latitude: f64, declination: f64) -> f64 {
    let (sin_h, cos_h) = hour_angle.to_radians().sin_cos();
    let (sin_phi, cos_phi) = latitude.to_radians().sin_cos();
    let tan_delta = declination.to_radians().tan();
    normalize_degrees_360(sin_h.atan2(cos_h * sin_phi - tan_delta * cos_phi).to_degrees())
}

fn incidence_angle(zenith: f64, azimuth_astro: f64, surface: &Surface) -> f64 {
    let (sin_z, cos_z) = zenith.to_radians().sin_cos();
    let (sin_slope, cos_slope) = surface.slope.to_radians().sin_cos();
    let relative_azimuth = (azimuth_astro - surface.azm_rotation).to_radians();
    (cos_z * cos_slope + sin_slope * sin_z * relative_azimuth.cos())
        .acos()
        .to_degrees()
}
