//! # SPA Engine
//!
//! The NREL Solar Position Algorithm (Reda & Andreas, 2004/2008): the Sun's
//! topocentric zenith and azimuth for an observer, the incidence angle on a
//! tilted surface, the equation of time, and local sunrise, transit and sunset.
//! Uncertainty is ±0.0003° over the years -2000 to 6000.
//!
//! All angles are in degrees, times of day in fractional local hours, and the
//! equation of time in minutes.
//!
//! ## Basic Usage
//!
//! ```
//! use spa_engine::{Atmosphere, FunctionCode, Location, SpaCalculator, Surface, TimeInstant};
//!
//! // 2003-10-17 12:30:30 local time, UTC-7
//! let time = TimeInstant::new(2003, 10, 17, 12, 30, 30.0, -7.0)
//!     .with_delta_ut1(0.0)
//!     .with_delta_t(67.0);
//! let location = Location::new(39.742476, -105.1786, 1830.14);
//! let atmosphere = Atmosphere::new(820.0, 11.0, 0.5667);
//! let surface = Surface::new(30.0, -10.0);
//!
//! let calculator = SpaCalculator::new(time, location, atmosphere, surface).unwrap();
//! let output = calculator.calculate(FunctionCode::All);
//!
//! assert!((output.zenith - 50.11162).abs() < 1e-4);
//! assert!((output.azimuth - 194.34024).abs() < 1e-4);
//!
//! let rts = output.rise_transit_set.unwrap();
//! println!("sunrise at {:?} local hours", rts.sunrise.hours());
//! ```
//!
//! ## Flat interface
//!
//! [`compute`] combined with [`SpaReport`] gives the all-`f64` shape with an
//! integer error code that language bindings expect. With the `std` feature,
//! [`host::engine`] adds a self-checked shared handle on top of it.
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod delta_t;
mod error;
mod geo;
mod heliocentric;
#[cfg(feature = "std")]
pub mod host;
mod math;
mod nutation;
pub mod output;
mod periodic;
mod rts;
mod terms;
pub mod time;
mod topocentric;
mod types;
mod validate;

#[cfg(test)]
mod tests;

pub use error::SpaError;
pub use geo::ApparentPosition;
pub use heliocentric::HeliocentricPosition;
pub use nutation::Nutation;
pub use output::{SpaOutput, SpaReport, NO_CROSSING_SENTINEL};
pub use rts::{RiseTransitSet, SolarEvent};
pub use time::JulianDate;
pub use topocentric::TopocentricPosition;
pub use types::{Atmosphere, FunctionCode, Horizon, Location, Surface, TimeInstant};
pub use validate::validate_inputs;

use crate::{geo::Ephemeris, rts::calculate_rise_transit_set};

/// Solar position calculator for one instant and one observer.
///
/// [`SpaCalculator::new`] validates the inputs and runs the position
/// pipeline once. [`SpaCalculator::calculate`] then only adds the parts the
/// function code asks for, so every code sees the same shared fields.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpaCalculator {
    time: TimeInstant,
    location: Location,
    atmosphere: Atmosphere,
    surface: Surface,
    ephemeris: Ephemeris,
    topocentric: TopocentricPosition,
}

impl SpaCalculator {
    /// Validates the inputs and computes the Sun's position.
    ///
    /// # Errors
    ///
    /// Returns the first [`SpaError`] found, checking fields in the order
    /// documented on [`validate_inputs`].
    ///
    /// # Example
    ///
    /// ```
    /// use spa_engine::{Atmosphere, Location, SpaCalculator, SpaError, Surface, TimeInstant};
    ///
    /// let time = TimeInstant::new(2024, 6, 21, 12, 0, 0.0, 0.0);
    /// let location = Location::new(91.0, 0.0, 0.0);
    ///
    /// let result = SpaCalculator::new(time, location, Atmosphere::default(), Surface::default());
    /// assert_eq!(result.unwrap_err(), SpaError::LatitudeOutOfRange);
    /// ```
    pub fn new(time: TimeInstant, location: Location, atmosphere: Atmosphere, surface: Surface) -> Result<Self, SpaError> {
        if let Err(error) = validate_inputs(&time, &location, &atmosphere, &surface) {
            log::debug!("rejected input (code {}): {error}", error.code());
            return Err(error);
        }

        let ephemeris = Ephemeris::at(JulianDate::from_instant(&time));
        log::trace!(
            "jd = {}, L = {}, B = {}, R = {}, dpsi = {}, deps = {}, eps = {}",
            ephemeris.julian.jd,
            ephemeris.heliocentric.longitude,
            ephemeris.heliocentric.latitude,
            ephemeris.heliocentric.radius,
            ephemeris.nutation.longitude,
            ephemeris.nutation.obliquity,
            ephemeris.apparent.true_obliquity
        );

        let topocentric = TopocentricPosition::observe(&ephemeris, &location, &atmosphere);
        log::trace!(
            "H = {}, delta' = {}, e = {}, zenith = {}",
            topocentric.hour_angle,
            topocentric.declination,
            topocentric.elevation,
            topocentric.zenith
        );

        Ok(Self {
            time,
            location,
            atmosphere,
            surface,
            ephemeris,
            topocentric,
        })
    }

    /// Calculator with the standard atmosphere and a horizontal surface.
    pub fn standard(time: TimeInstant, location: Location) -> Result<Self, SpaError> {
        Self::new(time, location, Atmosphere::default(), Surface::default())
    }

    pub fn time(&self) -> &TimeInstant {
        &self.time
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn atmosphere(&self) -> &Atmosphere {
        &self.atmosphere
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Runs the calculation for the outputs selected by `function_code`.
    ///
    /// Fields shared between function codes are identical whichever code
    /// produced them. The equation of time is always filled in.
    pub fn calculate(&self, function_code: FunctionCode) -> SpaOutput {
        let ephemeris = self.ephemeris;
        let topocentric = self.topocentric;

        let incidence = function_code
            .includes_incidence()
            .then(|| topocentric.incidence(&self.surface));
        let rise_transit_set = function_code
            .includes_rise_transit_set()
            .then(|| self.rise_transit_set(Horizon::SunriseSunset));

        SpaOutput {
            zenith: topocentric.zenith,
            azimuth: topocentric.azimuth,
            azimuth_astro: topocentric.azimuth_astro,
            incidence,
            equation_of_time: ephemeris.equation_of_time(),
            rise_transit_set,
            julian: ephemeris.julian,
            heliocentric: ephemeris.heliocentric,
            nutation: ephemeris.nutation,
            apparent: ephemeris.apparent,
            topocentric,
        }
    }

    /// Sunrise, transit and sunset on this calculator's calendar day for the
    /// given horizon.
    ///
    /// # Example
    ///
    /// ```
    /// use spa_engine::{Horizon, Location, SpaCalculator, TimeInstant};
    ///
    /// let time = TimeInstant::new(2024, 3, 20, 12, 0, 0.0, -4.0).with_delta_t(69.0);
    /// let calculator = SpaCalculator::standard(time, Location::new(40.1, -74.2, 0.0)).unwrap();
    ///
    /// let civil = calculator.rise_transit_set(Horizon::CivilTwilight);
    /// let sunrise = calculator.rise_transit_set(Horizon::SunriseSunset);
    /// assert!(civil.sunrise.hours().unwrap() < sunrise.sunrise.hours().unwrap());
    /// ```
    pub fn rise_transit_set(&self, horizon: Horizon) -> RiseTransitSet {
        calculate_rise_transit_set(&self.time, &self.location, horizon.altitude(self.atmosphere.atmos_refract))
    }
}

/// Validates the inputs and runs the calculation selected by `function_code`.
///
/// ```
/// use spa_engine::{compute, Atmosphere, FunctionCode, Location, SpaReport, Surface, TimeInstant};
///
/// let time = TimeInstant::new(2003, 10, 17, 12, 30, 30.0, -7.0).with_delta_t(67.0);
/// let location = Location::new(39.742476, -105.1786, 1830.14);
///
/// let report = SpaReport::from(compute(
///     &time,
///     &location,
///     &Atmosphere::new(820.0, 11.0, 0.5667),
///     &Surface::new(30.0, -10.0),
///     FunctionCode::Za,
/// ));
/// assert_eq!(report.error_code, 0);
/// assert_eq!(report.sunrise, 0.0);
/// ```
pub fn compute(
    time: &TimeInstant,
    location: &Location,
    atmosphere: &Atmosphere,
    surface: &Surface,
    function_code: FunctionCode,
) -> Result<SpaOutput, SpaError> {
    let calculator = SpaCalculator::new(*time, *location, *atmosphere, *surface)?;
    Ok(calculator.calculate(function_code))
}
