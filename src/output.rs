use chrono::NaiveTime;
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::{
    error::SpaError,
    geo::ApparentPosition,
    heliocentric::HeliocentricPosition,
    nutation::Nutation,
    rts::{RiseTransitSet, SolarEvent},
    time::JulianDate,
    topocentric::TopocentricPosition,
};

/// Value written to sunrise and sunset in a [`SpaReport`] when the Sun does
/// not cross the horizon that day.
pub const NO_CROSSING_SENTINEL: f64 = -99999.0;

/// Result of one calculation.
///
/// `incidence` is present for [`FunctionCode::ZaInc`](crate::FunctionCode::ZaInc)
/// and [`FunctionCode::All`](crate::FunctionCode::All); `rise_transit_set` for
/// [`FunctionCode::ZaRts`](crate::FunctionCode::ZaRts) and
/// [`FunctionCode::All`](crate::FunctionCode::All). The intermediate values of
/// the pipeline are kept for inspection.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpaOutput {
    /// Topocentric zenith angle, degrees
    pub zenith: f64,
    /// Topocentric azimuth eastward from north, degrees [0, 360)
    pub azimuth: f64,
    /// Topocentric azimuth westward from south, degrees [0, 360)
    pub azimuth_astro: f64,
    /// Incidence angle on the surface, degrees
    pub incidence: Option<f64>,
    /// Equation of time, minutes
    pub equation_of_time: f64,
    /// Sunrise, transit and sunset for the standard horizon
    pub rise_transit_set: Option<RiseTransitSet>,
    pub julian: JulianDate,
    pub heliocentric: HeliocentricPosition,
    pub nutation: Nutation,
    pub apparent: ApparentPosition,
    pub topocentric: TopocentricPosition,
}

/// Flat result with an integer error code.
///
/// This is the shape host wrappers hand across a language boundary: all
/// numbers are plain `f64`. When `error_code` is non-zero every numeric field
/// is `0.0`. Fields of a subset that was not requested are `0.0`; sunrise and
/// sunset are [`NO_CROSSING_SENTINEL`] when the Sun does not cross the horizon.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpaReport {
    pub zenith: f64,
    pub azimuth_astro: f64,
    pub azimuth: f64,
    pub incidence: f64,
    pub sunrise: f64,
    pub sunset: f64,
    pub suntransit: f64,
    pub sun_transit_alt: f64,
    pub eot: f64,
    pub error_code: i32,
}

impl SpaReport {
    /// A zero-filled report carrying `error`'s code.
    pub fn failed(error: SpaError) -> Self {
        Self {
            error_code: error.code(),
            ..Self::default()
        }
    }
}

fn event_or_sentinel(event: SolarEvent) -> f64 {
    event.hours().unwrap_or(NO_CROSSING_SENTINEL)
}

impl From<&SpaOutput> for SpaReport {
    fn from(output: &SpaOutput) -> Self {
        let mut report = Self {
            zenith: output.zenith,
            azimuth_astro: output.azimuth_astro,
            azimuth: output.azimuth,
            incidence: output.incidence.unwrap_or(0.0),
            eot: output.equation_of_time,
            ..Self::default()
        };
        if let Some(rts) = output.rise_transit_set {
            report.sunrise = event_or_sentinel(rts.sunrise);
            report.sunset = event_or_sentinel(rts.sunset);
            report.suntransit = rts.transit;
            report.sun_transit_alt = rts.transit_altitude;
        }
        report
    }
}

impl From<Result<SpaOutput, SpaError>> for SpaReport {
    fn from(result: Result<SpaOutput, SpaError>) -> Self {
        match result {
            Ok(output) => Self::from(&output),
            Err(error) => Self::failed(error),
        }
    }
}

/// Converts fractional local hours to a clock time, rounded to the nearest
/// second. Returns `None` outside [0, 24).
pub fn local_hours_to_time(hours: f64) -> Option<NaiveTime> {
    if !(0.0..24.0).contains(&hours) {
        return None;
    }
    let seconds = (hours * 3600.0).round() as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds % 86_400, 0)
}
