//! Input bounds checks.
//!
//! [`validate_inputs`] runs the checks in a fixed order and returns the first
//! failure, so a given input always maps to the same error code. Every check is
//! written so that NaN fails it.

use crate::{
    error::SpaError,
    types::{Atmosphere, Location, Surface, TimeInstant},
};

const MAX_ABS_DELTA_T: f64 = 8000.0;
const MAX_ABS_TIMEZONE: f64 = 18.0;
const MIN_ELEVATION: f64 = -6_500_000.0;
const MAX_PRESSURE: f64 = 5000.0;
const MAX_TEMPERATURE: f64 = 6000.0;
const MIN_TEMPERATURE: f64 = -273.0;
const MAX_ABS_ATMOS_REFRACT: f64 = 5.0;
const MAX_ABS_SURFACE_ANGLE: f64 = 360.0;

fn validate_year(year: i32) -> Result<(), SpaError> {
    if !(-2000..=6000).contains(&year) {
        return Err(SpaError::YearOutOfRange);
    }
    Ok(())
}

fn validate_month(month: i32) -> Result<(), SpaError> {
    if !(1..=12).contains(&month) {
        return Err(SpaError::MonthOutOfRange);
    }
    Ok(())
}

fn validate_day(day: i32) -> Result<(), SpaError> {
    if !(1..=31).contains(&day) {
        return Err(SpaError::DayOutOfRange);
    }
    Ok(())
}

fn validate_hour(hour: i32) -> Result<(), SpaError> {
    if !(0..=24).contains(&hour) {
        return Err(SpaError::HourOutOfRange);
    }
    Ok(())
}

fn validate_minute(minute: i32) -> Result<(), SpaError> {
    if !(0..=59).contains(&minute) {
        return Err(SpaError::MinuteOutOfRange);
    }
    Ok(())
}

fn validate_second(second: f64) -> Result<(), SpaError> {
    if !(0.0..60.0).contains(&second) {
        return Err(SpaError::SecondOutOfRange);
    }
    Ok(())
}

fn validate_pressure(pressure: f64) -> Result<(), SpaError> {
    if !(0.0..=MAX_PRESSURE).contains(&pressure) {
        return Err(SpaError::PressureOutOfRange);
    }
    Ok(())
}

fn validate_temperature(temperature: f64) -> Result<(), SpaError> {
    // Absolute zero itself is rejected.
    if !(temperature > MIN_TEMPERATURE && temperature <= MAX_TEMPERATURE) {
        return Err(SpaError::TemperatureOutOfRange);
    }
    Ok(())
}

fn validate_delta_ut1(delta_ut1: f64) -> Result<(), SpaError> {
    if !(delta_ut1 > -1.0 && delta_ut1 < 1.0) {
        return Err(SpaError::DeltaUt1OutOfRange);
    }
    Ok(())
}

/// 24:00:00 is the only valid time with hour 24.
fn validate_end_of_day(time: &TimeInstant) -> Result<(), SpaError> {
    if time.hour == 24 && time.minute > 0 {
        return Err(SpaError::MinuteOutOfRange);
    }
    if time.hour == 24 && time.second > 0.0 {
        return Err(SpaError::SecondOutOfRange);
    }
    Ok(())
}

fn validate_delta_t(delta_t: f64) -> Result<(), SpaError> {
    if !(-MAX_ABS_DELTA_T..=MAX_ABS_DELTA_T).contains(&delta_t) {
        return Err(SpaError::DeltaTOutOfRange);
    }
    Ok(())
}

fn validate_timezone(timezone: f64) -> Result<(), SpaError> {
    if !(-MAX_ABS_TIMEZONE..=MAX_ABS_TIMEZONE).contains(&timezone) {
        return Err(SpaError::TimezoneOutOfRange);
    }
    Ok(())
}

fn validate_lon(longitude: f64) -> Result<(), SpaError> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(SpaError::LongitudeOutOfRange);
    }
    Ok(())
}

fn validate_lat(latitude: f64) -> Result<(), SpaError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(SpaError::LatitudeOutOfRange);
    }
    Ok(())
}

fn validate_atmos_refract(atmos_refract: f64) -> Result<(), SpaError> {
    if !(-MAX_ABS_ATMOS_REFRACT..=MAX_ABS_ATMOS_REFRACT).contains(&atmos_refract) {
        return Err(SpaError::AtmosRefractOutOfRange);
    }
    Ok(())
}

fn validate_elevation(elevation: f64) -> Result<(), SpaError> {
    if !elevation.is_finite() || elevation < MIN_ELEVATION {
        return Err(SpaError::ElevationOutOfRange);
    }
    Ok(())
}

fn validate_slope(slope: f64) -> Result<(), SpaError> {
    if !(-MAX_ABS_SURFACE_ANGLE..=MAX_ABS_SURFACE_ANGLE).contains(&slope) {
        return Err(SpaError::SlopeOutOfRange);
    }
    Ok(())
}

fn validate_azm_rotation(azm_rotation: f64) -> Result<(), SpaError> {
    if !(-MAX_ABS_SURFACE_ANGLE..=MAX_ABS_SURFACE_ANGLE).contains(&azm_rotation) {
        return Err(SpaError::AzmRotationOutOfRange);
    }
    Ok(())
}

/// Checks every input field and returns the first failure.
///
/// Surface fields are checked for every function code, not only the ones
/// that report an incidence angle.
pub fn validate_inputs(
    time: &TimeInstant,
    location: &Location,
    atmosphere: &Atmosphere,
    surface: &Surface,
) -> Result<(), SpaError> {
    validate_year(time.year)?;
    validate_month(time.month)?;
    validate_day(time.day)?;
    validate_hour(time.hour)?;
    validate_minute(time.minute)?;
    validate_second(time.second)?;
    validate_pressure(atmosphere.pressure)?;
    validate_temperature(atmosphere.temperature)?;
    validate_delta_ut1(time.delta_ut1)?;
    validate_end_of_day(time)?;
    validate_delta_t(time.delta_t)?;
    validate_timezone(time.timezone)?;
    validate_lon(location.longitude)?;
    validate_lat(location.latitude)?;
    validate_atmos_refract(atmosphere.atmos_refract)?;
    validate_elevation(location.elevation)?;
    validate_slope(surface.slope)?;
    validate_azm_rotation(surface.azm_rotation)?;
    Ok(())
}
