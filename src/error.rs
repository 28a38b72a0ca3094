use thiserror::Error;

/// Errors reported by the solar position engine.
///
/// Every input field has its own variant. [`SpaError::code`] maps each one to
/// the stable integer used by the flat [`SpaReport`](crate::SpaReport), which
/// is the numbering of NREL's reference implementation (1 = year … 17 = ΔUT1).
///
/// # Variants
///
/// - `YearOutOfRange`: year must be in [-2000, 6000]
/// - `MonthOutOfRange`: month must be in [1, 12]
/// - `DayOutOfRange`: day must be in [1, 31]
/// - `HourOutOfRange`: hour must be in [0, 24]
/// - `MinuteOutOfRange`: minute must be in [0, 59], and 0 when hour is 24
/// - `SecondOutOfRange`: second must be in [0, 60), and 0 when hour is 24
/// - `DeltaTOutOfRange`: ΔT must be in [-8000, 8000] seconds
/// - `TimezoneOutOfRange`: timezone must be in [-18, 18] hours
/// - `LongitudeOutOfRange`: longitude must be in [-180, 180] degrees
/// - `LatitudeOutOfRange`: latitude must be in [-90, 90] degrees
/// - `ElevationOutOfRange`: elevation must be ≥ -6,500,000 meters
/// - `PressureOutOfRange`: pressure must be in [0, 5000] millibars
/// - `TemperatureOutOfRange`: temperature must be in (-273, 6000] °C
/// - `SlopeOutOfRange`: surface slope must be in [-360, 360] degrees
/// - `AzmRotationOutOfRange`: surface azimuth rotation must be in [-360, 360] degrees
/// - `AtmosRefractOutOfRange`: refraction at the horizon must be in [-5, 5] degrees
/// - `DeltaUt1OutOfRange`: ΔUT1 must be in (-1, 1) seconds
/// - `FunctionCodeOutOfRange`: the function code is not one of 0..=3
/// - `SelfCheckFailed`: the engine failed its reference-case check at start-up
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpaError {
    /// Year outside [-2000, 6000]
    #[error("year out of range")]
    YearOutOfRange,

    /// Month outside [1, 12]
    #[error("month out of range")]
    MonthOutOfRange,

    /// Day outside [1, 31]
    #[error("day out of range")]
    DayOutOfRange,

    /// Hour outside [0, 24]
    #[error("hour out of range")]
    HourOutOfRange,

    /// Minute outside [0, 59], or non-zero at hour 24
    #[error("minute out of range")]
    MinuteOutOfRange,

    /// Second outside [0, 60), or non-zero at hour 24
    #[error("second out of range")]
    SecondOutOfRange,

    /// ΔT outside [-8000, 8000] seconds
    #[error("ΔT out of range")]
    DeltaTOutOfRange,

    /// Timezone outside [-18, 18] hours
    #[error("timezone out of range")]
    TimezoneOutOfRange,

    /// Longitude outside [-180, 180] degrees
    #[error("longitude out of range")]
    LongitudeOutOfRange,

    /// Latitude outside [-90, 90] degrees
    #[error("latitude out of range")]
    LatitudeOutOfRange,

    /// Elevation below -6,500,000 meters
    #[error("elevation out of range")]
    ElevationOutOfRange,

    /// Pressure outside [0, 5000] millibars
    #[error("pressure out of range")]
    PressureOutOfRange,

    /// Temperature outside (-273, 6000] °C
    #[error("temperature out of range")]
    TemperatureOutOfRange,

    /// Surface slope outside [-360, 360] degrees
    #[error("surface slope out of range")]
    SlopeOutOfRange,

    /// Surface azimuth rotation outside [-360, 360] degrees
    #[error("surface azimuth rotation out of range")]
    AzmRotationOutOfRange,

    /// Atmospheric refraction outside [-5, 5] degrees
    #[error("atmospheric refraction out of range")]
    AtmosRefractOutOfRange,

    /// ΔUT1 outside (-1, 1) seconds
    #[error("ΔUT1 out of range")]
    DeltaUt1OutOfRange,

    /// Function code is not ZA, ZA_INC, ZA_RTS or ALL
    #[error("function code out of range")]
    FunctionCodeOutOfRange,

    /// Reference-case check failed during engine initialization
    #[error("engine self-check failed")]
    SelfCheckFailed,
}

impl SpaError {
    /// Every variant, in ascending code order.
    pub const ALL: [SpaError; 19] = [
        SpaError::YearOutOfRange,
        SpaError::MonthOutOfRange,
        SpaError::DayOutOfRange,
        SpaError::HourOutOfRange,
        SpaError::MinuteOutOfRange,
        SpaError::SecondOutOfRange,
        SpaError::DeltaTOutOfRange,
        SpaError::TimezoneOutOfRange,
        SpaError::LongitudeOutOfRange,
        SpaError::LatitudeOutOfRange,
        SpaError::ElevationOutOfRange,
        SpaError::PressureOutOfRange,
        SpaError::TemperatureOutOfRange,
        SpaError::SlopeOutOfRange,
        SpaError::AzmRotationOutOfRange,
        SpaError::AtmosRefractOutOfRange,
        SpaError::DeltaUt1OutOfRange,
        SpaError::FunctionCodeOutOfRange,
        SpaError::SelfCheckFailed,
    ];

    /// Stable non-zero integer code for this error.
    pub const fn code(self) -> i32 {
        match self {
            SpaError::YearOutOfRange => 1,
            SpaError::MonthOutOfRange => 2,
            SpaError::DayOutOfRange => 3,
            SpaError::HourOutOfRange => 4,
            SpaError::MinuteOutOfRange => 5,
            SpaError::SecondOutOfRange => 6,
            SpaError::DeltaTOutOfRange => 7,
            SpaError::TimezoneOutOfRange => 8,
            SpaError::LongitudeOutOfRange => 9,
            SpaError::LatitudeOutOfRange => 10,
            SpaError::ElevationOutOfRange => 11,
            SpaError::PressureOutOfRange => 12,
            SpaError::TemperatureOutOfRange => 13,
            SpaError::SlopeOutOfRange => 14,
            SpaError::AzmRotationOutOfRange => 15,
            SpaError::AtmosRefractOutOfRange => 16,
            SpaError::DeltaUt1OutOfRange => 17,
            SpaError::FunctionCodeOutOfRange => 18,
            SpaError::SelfCheckFailed => 19,
        }
    }

    /// Inverse of [`SpaError::code`]. Returns `None` for 0 and unknown codes.
    pub fn from_code(code: i32) -> Option<SpaError> {
        SpaError::ALL.iter().copied().find(|error| error.code() == code)
    }
}
