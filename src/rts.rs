//! Sunrise, solar transit and sunset for the calendar day of an instant.
//!
//! The solver works on three geocentric samples of the Sun (previous day, the
//! day itself and the next day, all at 0h UT with ΔT = 0), interpolates them
//! to each event and applies one altitude correction to the rise and set
//! estimates. States run transit → crossing test → rise → set; a day whose
//! Sun never crosses the requested altitude ends at the crossing test.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::{
    geo::Ephemeris,
    math::{normalize_degrees_180, normalize_degrees_180_signed, normalize_unit_interval},
    time::{dayfrac_to_local_hr, julian_day, JulianDate, SECONDS_PER_DAY},
    topocentric::{elevation_angle, equatorial_horizontal_parallax, ParallaxShift},
    types::{Location, TimeInstant},
};

/// Mean sidereal rate used to advance ν through the day, degrees per day.
const SIDEREAL_RATE_PER_DAY: f64 = 360.985_647;

/// Outcome of a sunrise or sunset search.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolarEvent {
    /// Event occurs at the given local hour of the day, [0, 24)
    Occurs(f64),
    /// Sun stays above the horizon all day (midnight sun)
    AllDay,
    /// Sun stays below the horizon all day (polar night)
    AllNight,
}

impl SolarEvent {
    /// Local hour of the event, or `None` if the Sun does not cross.
    pub fn hours(self) -> Option<f64> {
        match self {
            SolarEvent::Occurs(hours) => Some(hours),
            _ => None,
        }
    }
}

/// Sunrise, transit and sunset for one day.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiseTransitSet {
    /// Sunrise (or dawn, for a twilight horizon), local hours
    pub sunrise: SolarEvent,
    /// Sun transit, local hours in [0, 24)
    pub transit: f64,
    /// Sunset (or dusk, for a twilight horizon), local hours
    pub sunset: SolarEvent,
    /// Topocentric sun altitude at transit, degrees
    pub transit_altitude: f64,
    /// Local hour angle of the Sun at sunrise, degrees
    pub sunrise_hour_angle: Option<f64>,
    /// Local hour angle of the Sun at sunset, degrees
    pub sunset_hour_angle: Option<f64>,
}

/// Geocentric right ascension and declination at JD₀ - 1, JD₀ and JD₀ + 1.
#[derive(Copy, Clone, Debug)]
struct DaySamples {
    right_ascension: [f64; 3],
    declination: [f64; 3],
    radius: f64,
}

impl DaySamples {
    fn around(jd0: f64) -> Self {
        let mut right_ascension = [0.0; 3];
        let mut declination = [0.0; 3];
        let mut radius = 0.0;
        for (index, offset) in [-1.0, 0.0, 1.0].into_iter().enumerate() {
            let ephemeris = Ephemeris::at(JulianDate::from_julian_day(jd0 + offset, 0.0));
            right_ascension[index] = ephemeris.apparent.right_ascension;
            declination[index] = ephemeris.apparent.declination;
            if index == 1 {
                radius = ephemeris.heliocentric.radius;
            }
        }
        Self {
            right_ascension,
            declination,
            radius,
        }
    }
}

/// Interpolated sun position at one event of the day.
#[derive(Copy, Clone, Debug)]
struct EventSample {
    /// Day fraction of the event estimate, [0, 1)
    day_fraction: f64,
    declination: f64,
    local_hour_angle: f64,
    altitude: f64,
}

/// Result of the crossing test at the requested altitude.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Crossing {
    /// Hour angle H₀ of the crossing, degrees in [0, 180]
    At(f64),
    AlwaysAbove,
    AlwaysBelow,
}

struct Solver<'a> {
    location: &'a Location,
    samples: DaySamples,
    /// Apparent sidereal time at 0h UT, degrees
    sidereal_time: f64,
    delta_t: f64,
}

impl Solver<'_> {
    /// Three-point interpolation of a sampled quantity at day fraction `n`.
    fn interpolate(values: &[f64; 3], n: f64) -> f64 {
        let mut a = values[1] - values[0];
        let mut b = values[2] - values[1];
        if a.abs() >= 2.0 {
            a = normalize_unit_interval(a);
        }
        if b.abs() >= 2.0 {
            b = normalize_unit_interval(b);
        }
        values[1] + n * (a + b + (b - a) * n) / 2.0
    }

    fn sample(&self, day_fraction: f64) -> EventSample {
        let sidereal_time = self.sidereal_time + SIDEREAL_RATE_PER_DAY * day_fraction;
        let n = day_fraction + self.delta_t / SECONDS_PER_DAY;
        let right_ascension = Self::interpolate(&self.samples.right_ascension, n);
        let declination = Self::interpolate(&self.samples.declination, n);
        let local_hour_angle = normalize_degrees_180_signed(sidereal_time + self.location.longitude - right_ascension);
        let altitude = elevation_angle(self.location.latitude, declination, local_hour_angle);
        EventSample {
            day_fraction,
            declination,
            local_hour_angle,
            altitude,
        }
    }

    /// A non-finite altitude is never crossed: `-∞` counts as always
    /// above it, `+∞` and NaN as always below.
    fn crossing(&self, horizon_altitude: f64) -> Crossing {
        if !horizon_altitude.is_finite() {
            return if horizon_altitude < 0.0 {
                Crossing::AlwaysAbove
            } else {
                Crossing::AlwaysBelow
            };
        }
        let latitude = self.location.latitude.to_radians();
        let declination = self.samples.declination[1].to_radians();
        let argument = (horizon_altitude.to_radians().sin() - latitude.sin() * declination.sin())
            / (latitude.cos() * declination.cos());

        if argument > 1.0 {
            Crossing::AlwaysBelow
        } else if argument < -1.0 {
            Crossing::AlwaysAbove
        } else {
            Crossing::At(normalize_degrees_180(argument.acos().to_degrees()))
        }
    }

    /// Day fraction of a rise or set after the altitude correction.
    fn corrected_day_fraction(&self, event: &EventSample, horizon_altitude: f64) -> f64 {
        let correction = (event.altitude - horizon_altitude)
            / (360.0
                * event.declination.to_radians().cos()
                * self.location.latitude.to_radians().cos()
                * event.local_hour_angle.to_radians().sin());
        if correction.is_finite() {
            event.day_fraction + correction
        } else {
            event.day_fraction
        }
    }

    /// Topocentric altitude at transit: parallax applied to the interpolated
    /// geocentric position, no refraction.
    fn transit_altitude(&self, transit: &EventSample) -> f64 {
        let parallax = equatorial_horizontal_parallax(self.samples.radius);
        let shift = ParallaxShift::new(self.location, parallax, transit.local_hour_angle, transit.declination);
        elevation_angle(
            self.location.latitude,
            shift.declination,
            transit.local_hour_angle - shift.right_ascension,
        )
    }
}

/// Sunrise, transit and sunset on the calendar day of `time` for a crossing
/// altitude of `horizon_altitude` degrees.
///
/// Times are local hours in `time.timezone`. The input must already be
/// validated.
pub(crate) fn calculate_rise_transit_set(time: &TimeInstant, location: &Location, horizon_altitude: f64) -> RiseTransitSet {
    let jd0 = julian_day(time.year, time.month, time.day, 0, 0, 0.0, 0.0, 0.0);
    let sidereal_time = Ephemeris::at(JulianDate::from_julian_day(jd0, time.delta_t))
        .apparent
        .apparent_sidereal_time;

    let solver = Solver {
        location,
        samples: DaySamples::around(jd0),
        sidereal_time,
        delta_t: time.delta_t,
    };

    let transit_estimate = (solver.samples.right_ascension[1] - location.longitude - sidereal_time) / 360.0;

    let transit = solver.sample(normalize_unit_interval(transit_estimate));
    let transit_hours = dayfrac_to_local_hr(transit.day_fraction - transit.local_hour_angle / 360.0, time.timezone);
    let transit_altitude = solver.transit_altitude(&transit);

    let no_crossing = |event: SolarEvent| {
        log::debug!(
            "no crossing of {horizon_altitude}° on {}-{:02}-{:02} at latitude {}: {event:?}",
            time.year,
            time.month,
            time.day,
            location.latitude
        );
        RiseTransitSet {
            sunrise: event,
            transit: transit_hours,
            sunset: event,
            transit_altitude,
            sunrise_hour_angle: None,
            sunset_hour_angle: None,
        }
    };

    let hour_angle = match solver.crossing(horizon_altitude) {
        Crossing::At(hour_angle) => hour_angle,
        Crossing::AlwaysAbove => return no_crossing(SolarEvent::AllDay),
        Crossing::AlwaysBelow => return no_crossing(SolarEvent::AllNight),
    };

    let rise = solver.sample(normalize_unit_interval(transit_estimate - hour_angle / 360.0));
    let set = solver.sample(normalize_unit_interval(transit_estimate + hour_angle / 360.0));

    let sunrise = dayfrac_to_local_hr(solver.corrected_day_fraction(&rise, horizon_altitude), time.timezone);
    let sunset = dayfrac_to_local_hr(solver.corrected_day_fraction(&set, horizon_altitude), time.timezone);
    log::trace!("rts: H0 = {hour_angle}, rise = {sunrise}, transit = {transit_hours}, set = {sunset}");

    RiseTransitSet {
        sunrise: SolarEvent::Occurs(sunrise),
        transit: transit_hours,
        sunset: SolarEvent::Occurs(sunset),
        transit_altitude,
        sunrise_hour_angle: Some(rise.local_hour_angle),
        sunset_hour_angle: Some(set.local_hour_angle),
    }
}
