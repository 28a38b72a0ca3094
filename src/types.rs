//! Input types for the solar position engine.
//!
//! All inputs are plain `Copy` values in the units the algorithm uses
//! directly: degrees, meters, millibars, °C, hours and seconds. Nothing is
//! converted or validated on construction; [`crate::validate`] checks the
//! whole set at once before any computation.

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

use crate::{delta_t, error::SpaError, geo::SUN_RADIUS};

/// A civil date and time with its timezone and the two time-scale offsets.
///
/// Fields are signed so that out-of-range values coming from a host can be
/// represented and rejected by validation instead of wrapping.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeInstant {
    /// Year, -2000 to 6000
    pub year: i32,
    /// Month, 1 to 12
    pub month: i32,
    /// Day of month, 1 to 31
    pub day: i32,
    /// Local hour, 0 to 24 (24 only as 24:00:00)
    pub hour: i32,
    /// Minute, 0 to 59
    pub minute: i32,
    /// Second including fraction, [0, 60)
    pub second: f64,
    /// Hours east of UTC, -18 to 18 (west is negative)
    pub timezone: f64,
    /// UT1 - UTC in seconds, (-1, 1)
    #[cfg_attr(feature = "serde", serde(default))]
    pub delta_ut1: f64,
    /// TT - UT1 in seconds, -8000 to 8000
    #[cfg_attr(feature = "serde", serde(default))]
    pub delta_t: f64,
}

impl TimeInstant {
    /// Creates an instant with ΔUT1 and ΔT set to zero.
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: f64, timezone: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            timezone,
            delta_ut1: 0.0,
            delta_t: 0.0,
        }
    }

    /// Takes calendar fields and timezone from a chrono `DateTime`.
    ///
    /// The timezone is the datetime's UTC offset at that instant, so DST is
    /// already applied.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>, delta_ut1: f64, delta_t: f64) -> Self {
        let seconds = f64::from(datetime.second()) + f64::from(datetime.nanosecond()) / 1_000_000_000.0;
        let timezone = f64::from(datetime.offset().fix().local_minus_utc()) / 3600.0;
        Self {
            year: datetime.year(),
            month: datetime.month() as i32,
            day: datetime.day() as i32,
            hour: datetime.hour() as i32,
            minute: datetime.minute() as i32,
            second: seconds,
            timezone,
            delta_ut1,
            delta_t,
        }
    }

    #[must_use]
    pub fn with_delta_t(mut self, delta_t: f64) -> Self {
        self.delta_t = delta_t;
        self
    }

    #[must_use]
    pub fn with_delta_ut1(mut self, delta_ut1: f64) -> Self {
        self.delta_ut1 = delta_ut1;
        self
    }

    /// Fills ΔT from [`delta_t::estimate`] for this instant's year and month.
    #[must_use]
    pub fn with_estimated_delta_t(mut self) -> Self {
        self.delta_t = delta_t::estimate(self.year, self.month);
        self
    }
}

/// Observer position on the Earth.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Geodetic latitude in degrees, north positive
    pub latitude: f64,
    /// Longitude in degrees, east positive
    pub longitude: f64,
    /// Elevation above sea level in meters
    #[cfg_attr(feature = "serde", serde(default))]
    pub elevation: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }
}

/// Local atmospheric conditions used for the refraction correction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Atmosphere {
    /// Annual average local pressure in millibars
    pub pressure: f64,
    /// Annual average local temperature in °C
    pub temperature: f64,
    /// Atmospheric refraction at sunrise and sunset in degrees
    pub atmos_refract: f64,
}

impl Atmosphere {
    /// Standard atmospheric refraction at the horizon, in degrees.
    pub const STANDARD_REFRACTION: f64 = 0.5667;

    pub fn new(pressure: f64, temperature: f64, atmos_refract: f64) -> Self {
        Self {
            pressure,
            temperature,
            atmos_refract,
        }
    }
}

impl Default for Atmosphere {
    /// Sea-level standard atmosphere: 1013.25 mbar, 15 °C, 0.5667° refraction.
    fn default() -> Self {
        Self {
            pressure: 1013.25,
            temperature: 15.0,
            atmos_refract: Self::STANDARD_REFRACTION,
        }
    }
}

/// Orientation of a receiving surface, for the incidence angle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Surface {
    /// Slope from horizontal in degrees
    pub slope: f64,
    /// Azimuth rotation in degrees, measured from south to the projection of
    /// the surface normal on the horizontal plane, east negative
    pub azm_rotation: f64,
}

impl Surface {
    pub fn new(slope: f64, azm_rotation: f64) -> Self {
        Self { slope, azm_rotation }
    }
}

/// Selects which outputs a calculation produces.
///
/// Integer codes are stable and match the flat wrapper interface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FunctionCode {
    /// Zenith and azimuth
    Za,
    /// Zenith, azimuth and surface incidence
    ZaInc,
    /// Zenith, azimuth and sunrise/transit/sunset
    ZaRts,
    /// Everything
    #[default]
    All,
}

impl FunctionCode {
    pub const fn code(self) -> i32 {
        match self {
            FunctionCode::Za => 0,
            FunctionCode::ZaInc => 1,
            FunctionCode::ZaRts => 2,
            FunctionCode::All => 3,
        }
    }

    pub const fn includes_incidence(self) -> bool {
        matches!(self, FunctionCode::ZaInc | FunctionCode::All)
    }

    pub const fn includes_rise_transit_set(self) -> bool {
        matches!(self, FunctionCode::ZaRts | FunctionCode::All)
    }
}

impl TryFrom<i32> for FunctionCode {
    type Error = SpaError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(FunctionCode::Za),
            1 => Ok(FunctionCode::ZaInc),
            2 => Ok(FunctionCode::ZaRts),
            3 => Ok(FunctionCode::All),
            _ => Err(SpaError::FunctionCodeOutOfRange),
        }
    }
}

/// Sun altitude that defines a rise/set crossing.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Horizon {
    /// Upper limb on the horizon: -(solar radius + atmospheric refraction)
    #[default]
    SunriseSunset,
    /// Sun center 6° below the horizon
    CivilTwilight,
    /// Sun center 12° below the horizon
    NauticalTwilight,
    /// Sun center 18° below the horizon
    AstronomicalTwilight,
    /// Sun center at the given altitude in degrees. A non-finite altitude
    /// is never crossed.
    Custom(f64),
}

impl Horizon {
    /// The altitude h₀′ in degrees for this horizon.
    pub fn altitude(self, atmos_refract: f64) -> f64 {
        match self {
            Horizon::SunriseSunset => -(SUN_RADIUS + atmos_refract),
            Horizon::CivilTwilight => -6.0,
            Horizon::NauticalTwilight => -12.0,
            Horizon::AstronomicalTwilight => -18.0,
            Horizon::Custom(altitude) => altitude,
        }
    }
}
