#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::{math::normalize_unit_interval, types::TimeInstant};

/// Reference Julian Day for the J2000.0 epoch
pub(crate) const J2000_EPOCH_JD: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Seconds per day
pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian dates derived from one instant.
///
/// # Fields
///
/// - `jd`: Julian Day (UT)
/// - `jde`: Julian Ephemeris Day (TT)
/// - `jc`: Julian Century from J2000.0 (UT)
/// - `jce`: Julian Ephemeris Century from J2000.0 (TT)
/// - `jme`: Julian Ephemeris Millennium from J2000.0 (TT)
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    /// Julian Day (UT)
    pub jd: f64,
    /// Julian Ephemeris Day (TT)
    pub jde: f64,
    /// Julian Century from J2000.0 (UT)
    pub jc: f64,
    /// Julian Ephemeris Century from J2000.0 (TT)
    pub jce: f64,
    /// Julian Ephemeris Millennium from J2000.0 (TT)
    pub jme: f64,
}

impl JulianDate {
    /// Derives the ephemeris scales from a Julian Day and ΔT in seconds.
    pub fn from_julian_day(jd: f64, delta_t: f64) -> Self {
        let jde = julian_ephemeris_day_from_julian_day(jd, delta_t);
        let jce = julian_ephemeris_century_from_julian_ephemeris_day(jde);
        Self {
            jd,
            jde,
            jc: julian_century_from_julian_day(jd),
            jce,
            jme: julian_ephemeris_millennium_from_julian_ephemeris_century(jce),
        }
    }

    /// Julian dates of a validated instant, including ΔUT1 and ΔT.
    pub fn from_instant(instant: &TimeInstant) -> Self {
        let jd = julian_day(
            instant.year,
            instant.month,
            instant.day,
            instant.hour,
            instant.minute,
            instant.second,
            instant.delta_ut1,
            instant.timezone,
        );
        Self::from_julian_day(jd, instant.delta_t)
    }
}

/// Compute the astronomical Julian Day for a civil date and time.
///
/// - `delta_ut1`: UT1 - UTC in **seconds**, added to the seconds field.
/// - `timezone`: hours east of UTC; subtracted to obtain UT.
///
/// January and February count as months 13 and 14 of the previous year. The
/// Gregorian correction applies from JD 2299160.5 (1582-10-15) on; earlier
/// dates are in the proleptic Julian calendar.
#[allow(clippy::too_many_arguments)]
pub fn julian_day(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: f64,
    delta_ut1: f64,
    timezone: f64,
) -> f64 {
    let mut year = year;
    let mut month = month;

    let day_decimal = f64::from(day)
        + (f64::from(hour) - timezone + (f64::from(minute) + (second + delta_ut1) / 60.0) / 60.0) / 24.0;

    if month < 3 {
        month += 12;
        year -= 1;
    }

    let mut julian_day = (365.25 * (f64::from(year) + 4716.0)).trunc() + (30.6001 * f64::from(month + 1)).trunc()
        + day_decimal
        - 1524.5;

    if julian_day > 2_299_160.0 {
        let a = f64::from(year / 100);
        julian_day += 2.0 - a + (a / 4.0).trunc();
    }
    julian_day
}

/// Julian century (T) from the given Julian Day (JD),
/// measured in Julian centuries since the J2000.0 epoch.
pub(crate) fn julian_century_from_julian_day(julian_day: f64) -> f64 {
    (julian_day - J2000_EPOCH_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Julian Ephemeris Day (JDE) from Julian Day (JD) and ΔT in seconds.
pub(crate) fn julian_ephemeris_day_from_julian_day(julian_day: f64, delta_t: f64) -> f64 {
    julian_day + delta_t / SECONDS_PER_DAY
}

pub(crate) fn julian_ephemeris_century_from_julian_ephemeris_day(ephemeris_day: f64) -> f64 {
    (ephemeris_day - J2000_EPOCH_JD) / DAYS_PER_JULIAN_CENTURY
}

pub(crate) fn julian_ephemeris_millennium_from_julian_ephemeris_century(ephemeris_century: f64) -> f64 {
    ephemeris_century / 10.0
}

/// Convert a UT day fraction to local hour of the day.
///
/// # Arguments
///
/// * `day_fraction` - Fraction of the UT day, 0.0 is midnight UT.
/// * `timezone` - Hours east of UTC.
///
/// # Returns
///
/// Local hour in [0.0, 24.0). The result wraps, so an event late in the UT day
/// may map to early local hours and vice versa.
pub(crate) fn dayfrac_to_local_hr(day_fraction: f64, timezone: f64) -> f64 {
    24.0 * normalize_unit_interval(day_fraction + timezone / 24.0)
}

/// Normalize a time offset (in minutes) to a small range around zero.
///
/// Values more than 20 minutes from zero are moved by one full day (1440
/// minutes), so that the result lies in \[-20, 20\] minutes. Angle wrapping in
/// the equation of time otherwise yields results off by almost a full day.
pub(crate) fn normalize_time_offset_minutes(minutes: f64) -> f64 {
    let mut limited = minutes;
    if limited < -20.0_f64 {
        limited += 1440.0_f64;
    } else if limited > 20.0_f64 {
        limited -= 1440.0_f64;
    }
    limited
}

/// Compute the equation of time (`EoT`) in minutes.
///
/// # Arguments
///
/// * `mean_longitude_deg` - Mean longitude of the Sun (degrees).
/// * `apparent_ra_deg` - Apparent right ascension of the Sun (degrees).
/// * `nutation_longitude_deg` - Nutation in longitude (degrees).
/// * `true_obliquity_deg` - True obliquity of the ecliptic (degrees).
///
/// # Returns
///
/// Apparent minus mean solar time, in \[-20, 20\] minutes.
pub(crate) fn equation_of_time(
    mean_longitude_deg: f64,
    apparent_ra_deg: f64,
    nutation_longitude_deg: f64,
    true_obliquity_deg: f64,
) -> f64 {
    normalize_time_offset_minutes(
        4.0 * (mean_longitude_deg - 0.005_718_3 - apparent_ra_deg
            + nutation_longitude_deg * true_obliquity_deg.to_radians().cos()),
    )
}
