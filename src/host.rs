//! Shared engine handle for language bindings.
//!
//! Bindings call [`engine`] to obtain a process-wide [`Engine`]. The first
//! call verifies the build against the published NREL test case; concurrent
//! first callers wait for that check instead of repeating it.

use std::sync::OnceLock;

use crate::{
    compute, Atmosphere, FunctionCode, Location, SolarEvent, SpaError, SpaReport, Surface, TimeInstant,
};

static ENGINE: OnceLock<Engine> = OnceLock::new();

/// Returns the shared engine, initializing it on first use.
pub fn engine() -> &'static Engine {
    ENGINE.get_or_init(Engine::initialize)
}

/// Flat, integer-coded entry point to the calculator.
#[derive(Debug)]
pub struct Engine {
    self_check: Result<(), SpaError>,
}

// NREL technical report TP-560-34302, table A5.1.
const REFERENCE_ZENITH: f64 = 50.11162;
const REFERENCE_AZIMUTH: f64 = 194.34024;
const REFERENCE_INCIDENCE: f64 = 25.18700;
const REFERENCE_SUNRISE: f64 = 6.212067;
const REFERENCE_SUNSET: f64 = 17.338667;
const REFERENCE_TOLERANCE: f64 = 1e-4;

fn within_tolerance(value: f64, expected: f64) -> bool {
    (value - expected).abs() < REFERENCE_TOLERANCE
}

fn run_self_check() -> Result<(), SpaError> {
    let time = TimeInstant::new(2003, 10, 17, 12, 30, 30.0, -7.0)
        .with_delta_ut1(0.0)
        .with_delta_t(67.0);
    let location = Location::new(39.742476, -105.1786, 1830.14);
    let atmosphere = Atmosphere::new(820.0, 11.0, 0.5667);
    let surface = Surface::new(30.0, -10.0);

    let output = compute(&time, &location, &atmosphere, &surface, FunctionCode::All)?;
    let rts = output.rise_transit_set.ok_or(SpaError::SelfCheckFailed)?;

    let matches = within_tolerance(output.zenith, REFERENCE_ZENITH)
        && within_tolerance(output.azimuth, REFERENCE_AZIMUTH)
        && output
            .incidence
            .is_some_and(|incidence| within_tolerance(incidence, REFERENCE_INCIDENCE))
        && matches!(rts.sunrise, SolarEvent::Occurs(sunrise) if within_tolerance(sunrise, REFERENCE_SUNRISE))
        && matches!(rts.sunset, SolarEvent::Occurs(sunset) if within_tolerance(sunset, REFERENCE_SUNSET));

    if matches {
        Ok(())
    } else {
        log::error!(
            "self-check mismatch: zenith {}, azimuth {}, incidence {:?}, sunrise {:?}, sunset {:?}",
            output.zenith,
            output.azimuth,
            output.incidence,
            rts.sunrise,
            rts.sunset
        );
        Err(SpaError::SelfCheckFailed)
    }
}

impl Engine {
    fn initialize() -> Self {
        let self_check = run_self_check();
        match self_check {
            Ok(()) => log::info!("solar position engine ready"),
            Err(error) => log::error!("solar position engine failed its self-check: {error}"),
        }
        Self { self_check }
    }

    /// Outcome of the check run when the engine was created.
    pub fn self_check(&self) -> Result<(), SpaError> {
        self.self_check
    }

    /// Validates and calculates from flat arguments.
    ///
    /// `function_code` is 0 (zenith/azimuth), 1 (+ incidence), 2 (+ rise,
    /// transit, set) or 3 (all). Any other value yields error code 18. An
    /// engine whose self-check failed answers every call with code 19.
    ///
    /// ```
    /// let report = spa_engine::host::engine().calculate(
    ///     2003, 10, 17, 12, 30, 30.0, -7.0,
    ///     39.742476, -105.1786, 1830.14,
    ///     820.0, 11.0,
    ///     0.0, 67.0,
    ///     30.0, -10.0, 0.5667,
    ///     3,
    /// );
    /// assert_eq!(report.error_code, 0);
    /// assert!((report.incidence - 25.187).abs() < 1e-3);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn calculate(
        &self,
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: f64,
        timezone: f64,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        pressure: f64,
        temperature: f64,
        delta_ut1: f64,
        delta_t: f64,
        slope: f64,
        azm_rotation: f64,
        atmos_refract: f64,
        function_code: i32,
    ) -> SpaReport {
        if let Err(error) = self.self_check {
            return SpaReport::failed(error);
        }
        let function_code = match FunctionCode::try_from(function_code) {
            Ok(function_code) => function_code,
            Err(error) => {
                log::debug!("rejected function code {function_code}");
                return SpaReport::failed(error);
            }
        };

        let time = TimeInstant {
            year,
            month,
            day,
            hour,
            minute,
            second,
            timezone,
            delta_ut1,
            delta_t,
        };
        SpaReport::from(compute(
            &time,
            &Location::new(latitude, longitude, elevation),
            &Atmosphere::new(pressure, temperature, atmos_refract),
            &Surface::new(slope, azm_rotation),
            function_code,
        ))
    }
}
