#![allow(clippy::unwrap_used, clippy::panic)]
extern crate std;

use chrono::{DateTime, FixedOffset, NaiveTime, TimeZone, Utc};
use proptest::prelude::*;

use crate::{
    compute, delta_t, output::local_hours_to_time, Atmosphere, FunctionCode, Horizon, Location, SolarEvent,
    SpaCalculator, SpaError, SpaOutput, SpaReport, Surface, TimeInstant, NO_CROSSING_SENTINEL,
};

mod continuity_tests;

fn nrel_time() -> TimeInstant {
    TimeInstant::new(2003, 10, 17, 12, 30, 30.0, -7.0)
        .with_delta_ut1(0.0)
        .with_delta_t(67.0)
}

fn nrel_location() -> Location {
    Location::new(39.742476, -105.1786, 1830.14)
}

fn nrel_atmosphere() -> Atmosphere {
    Atmosphere::new(820.0, 11.0, 0.5667)
}

fn nrel_surface() -> Surface {
    Surface::new(30.0, -10.0)
}

fn nrel_calculator() -> SpaCalculator {
    SpaCalculator::new(nrel_time(), nrel_location(), nrel_atmosphere(), nrel_surface()).unwrap()
}

fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{what}: expected {expected}, got {actual} (diff {})",
        (actual - expected).abs()
    );
}

#[test]
fn nrel_reference_case() {
    let output = nrel_calculator().calculate(FunctionCode::All);

    assert_close(output.julian.jd, 2452930.312847, 1e-6, "jd");
    assert_close(output.heliocentric.longitude, 24.0182616917, 1e-8, "L");
    assert_close(output.heliocentric.latitude, -0.0001011219, 1e-8, "B");
    assert_close(output.heliocentric.radius, 0.9965422974, 1e-8, "R");
    assert_close(output.nutation.longitude, -0.00399840, 1e-8, "delta psi");
    assert_close(output.nutation.obliquity, 0.00166657, 1e-8, "delta epsilon");
    assert_close(output.apparent.true_obliquity, 23.440465, 1e-6, "epsilon");
    assert_close(output.apparent.apparent_sidereal_time, 318.5119, 1e-4, "nu");
    assert_close(output.apparent.right_ascension, 202.22741, 1e-5, "alpha");
    assert_close(output.apparent.declination, -9.31434, 1e-5, "delta");
    assert_close(output.topocentric.hour_angle, 11.105900, 1e-5, "H");
    assert_close(output.topocentric.local_hour_angle, 11.106271, 1e-5, "H'");
    assert_close(output.topocentric.declination, -9.316179, 1e-6, "delta'");

    assert_close(output.zenith, 50.11162, 1e-5, "zenith");
    assert_close(output.azimuth, 194.34024, 1e-5, "azimuth");
    assert_close(output.azimuth_astro, 14.34024, 1e-5, "azimuth_astro");
    assert_close(output.incidence.unwrap(), 25.18700, 1e-5, "incidence");
    assert_close(output.equation_of_time, 14.641511, 1e-5, "eot");

    let rts = output.rise_transit_set.unwrap();
    assert_close(rts.sunrise.hours().unwrap(), 6.212067, 1e-5, "sunrise");
    assert_close(rts.transit, 11.768045, 1e-5, "transit");
    assert_close(rts.sunset.hours().unwrap(), 17.338667, 1e-5, "sunset");
    assert_close(rts.transit_altitude, 40.952563, 1e-5, "transit altitude");
}

#[test]
fn nrel_rise_and_set_as_clock_times() {
    let rts = nrel_calculator().rise_transit_set(Horizon::SunriseSunset);
    let sunrise = local_hours_to_time(rts.sunrise.hours().unwrap()).unwrap();
    let sunset = local_hours_to_time(rts.sunset.hours().unwrap()).unwrap();
    assert_eq!(sunrise, NaiveTime::from_hms_opt(6, 12, 43).unwrap());
    assert_eq!(sunset, NaiveTime::from_hms_opt(17, 20, 19).unwrap());
}

#[test]
fn compute_agrees_with_calculator() {
    let via_compute = compute(
        &nrel_time(),
        &nrel_location(),
        &nrel_atmosphere(),
        &nrel_surface(),
        FunctionCode::All,
    )
    .unwrap();
    assert_eq!(via_compute, nrel_calculator().calculate(FunctionCode::All));
}

#[test]
fn report_carries_nrel_values() {
    let report = SpaReport::from(compute(
        &nrel_time(),
        &nrel_location(),
        &nrel_atmosphere(),
        &nrel_surface(),
        FunctionCode::All,
    ));
    assert_eq!(report.error_code, 0);
    assert_close(report.zenith, 50.11162, 1e-5, "zenith");
    assert_close(report.sunrise, 6.212067, 1e-5, "sunrise");
    assert_close(report.suntransit, 11.768045, 1e-5, "transit");
    assert_close(report.sun_transit_alt, 40.952563, 1e-5, "sta");
}

#[test]
fn year_outside_window_reports_code_1() {
    let time = TimeInstant::new(6001, 1, 1, 0, 0, 0.0, 0.0);
    let result = compute(
        &time,
        &nrel_location(),
        &Atmosphere::default(),
        &Surface::default(),
        FunctionCode::Za,
    );
    assert_eq!(result, Err(SpaError::YearOutOfRange));
    assert_eq!(SpaReport::from(result), SpaReport::failed(SpaError::YearOutOfRange));
    assert_eq!(SpaReport::from(result).error_code, 1);
}

#[test]
fn invalid_latitude_reports_code_10_and_zero_fill() {
    let result = compute(
        &nrel_time(),
        &Location::new(91.0, 0.0, 0.0),
        &Atmosphere::default(),
        &Surface::default(),
        FunctionCode::All,
    );
    let report = SpaReport::from(result);
    assert_eq!(report.error_code, 10);
    assert_eq!(report.zenith, 0.0);
    assert_eq!(report.sunrise, 0.0);
    assert_eq!(report.eot, 0.0);
}

#[test]
fn window_edges_are_accepted() {
    for year in [-2000, 6000] {
        let time = TimeInstant::new(year, 6, 1, 12, 0, 0.0, 0.0);
        let output = compute(
            &time,
            &Location::new(0.0, 0.0, 0.0),
            &Atmosphere::default(),
            &Surface::default(),
            FunctionCode::All,
        )
        .unwrap();
        assert!(output.zenith.is_finite());
        assert!((0.0..360.0).contains(&output.azimuth));
    }
}

#[test]
fn hour_24_is_next_midnight() {
    let end_of_day = TimeInstant::new(2024, 5, 10, 24, 0, 0.0, 2.0).with_delta_t(69.0);
    let next_midnight = TimeInstant::new(2024, 5, 11, 0, 0, 0.0, 2.0).with_delta_t(69.0);
    let location = Location::new(48.2, 16.37, 170.0);
    let a = SpaCalculator::standard(end_of_day, location).unwrap().calculate(FunctionCode::Za);
    let b = SpaCalculator::standard(next_midnight, location).unwrap().calculate(FunctionCode::Za);
    assert_close(a.zenith, b.zenith, 1e-9, "zenith");
    assert_close(a.azimuth, b.azimuth, 1e-9, "azimuth");
}

#[test]
fn tromso_midnight_sun_and_polar_night() {
    let location = Location::new(69.65, 18.96, 0.0);

    let summer = TimeInstant::new(2024, 6, 21, 12, 0, 0.0, 1.0).with_delta_t(69.0);
    let summer = SpaCalculator::standard(summer, location).unwrap().calculate(FunctionCode::All);
    assert!(summer.zenith < 50.0, "summer zenith {}", summer.zenith);
    let rts = summer.rise_transit_set.unwrap();
    assert_eq!(rts.sunrise, SolarEvent::AllDay);
    assert_eq!(rts.sunset, SolarEvent::AllDay);
    assert_close(rts.transit_altitude, 43.785, 1e-3, "summer transit altitude");

    let winter = TimeInstant::new(2024, 12, 21, 12, 0, 0.0, 1.0).with_delta_t(69.0);
    let winter = SpaCalculator::standard(winter, location).unwrap().calculate(FunctionCode::All);
    assert!(winter.zenith > 90.0, "winter zenith {}", winter.zenith);
    let rts = winter.rise_transit_set.unwrap();
    assert_eq!(rts.sunrise, SolarEvent::AllNight);
    assert_eq!(rts.sunset, SolarEvent::AllNight);
    assert!(rts.transit_altitude < 0.0);

    let report = SpaReport::from(&winter);
    assert_eq!(report.sunrise, NO_CROSSING_SENTINEL);
    assert_eq!(report.sunset, NO_CROSSING_SENTINEL);
    assert_close(report.suntransit, 11.707, 1e-3, "winter transit");
}

#[test]
fn equator_equinox_noon_is_nearly_overhead() {
    let time = TimeInstant::new(2024, 3, 20, 12, 7, 0.0, 0.0).with_delta_t(69.0);
    let output = SpaCalculator::standard(time, Location::new(0.0, 0.0, 0.0))
        .unwrap()
        .calculate(FunctionCode::Za);
    assert!(output.zenith < 5.0, "zenith {}", output.zenith);
    assert_eq!(output.incidence, None);
    assert_eq!(output.rise_transit_set, None);
}

#[test]
fn poles_have_a_zenith_on_the_seasonal_side() {
    let cases = [
        (90.0, 6, false),
        (90.0, 12, true),
        (-90.0, 6, true),
        (-90.0, 12, false),
    ];
    for (latitude, month, dark) in cases {
        let time = TimeInstant::new(2024, month, 21, 12, 0, 0.0, 0.0).with_delta_t(69.0);
        let output = compute(
            &time,
            &Location::new(latitude, 0.0, 0.0),
            &Atmosphere::default(),
            &Surface::default(),
            FunctionCode::Za,
        )
        .unwrap();
        assert_eq!(output.zenith > 90.0, dark, "lat {latitude} month {month}: zenith {}", output.zenith);
        assert!((output.zenith - 90.0).abs() > 20.0, "lat {latitude} month {month}: zenith {}", output.zenith);
        assert!((0.0..360.0).contains(&output.azimuth), "lat {latitude} month {month}: azimuth {}", output.azimuth);
        assert!(output.azimuth_astro.is_finite());
    }
}

#[test]
fn large_refraction_setting_stays_physical_before_sunrise() {
    // With atmos_refract = 5 the refraction gate reaches past -5.11°, where
    // Bennett's formula diverges.
    let location = Location::new(0.0, 0.0, 0.0);
    let atmosphere = Atmosphere::new(1010.0, 10.0, 5.0);
    let mut lowest = f64::INFINITY;
    let mut highest = f64::NEG_INFINITY;

    for step in 0..2400 {
        let total = 5 * 3600 + 30 * 60 + step;
        let time =
            TimeInstant::new(2024, 3, 20, total / 3600, total / 60 % 60, f64::from(total % 60), 0.0).with_delta_t(69.0);
        let output = compute(&time, &location, &atmosphere, &Surface::default(), FunctionCode::Za).unwrap();
        let topocentric = output.topocentric;

        assert!(
            (0.0..1.0).contains(&topocentric.refraction_correction),
            "step {step}: e0 = {}, refraction = {}",
            topocentric.elevation_uncorrected,
            topocentric.refraction_correction
        );
        assert!((0.0..=180.0).contains(&output.zenith), "step {step}: zenith = {}", output.zenith);
        lowest = lowest.min(topocentric.elevation_uncorrected);
        highest = highest.max(topocentric.elevation_uncorrected);
    }
    assert!(lowest < -5.2 && highest > -5.0, "window covers e0 from {lowest} to {highest}");
}

#[test]
fn calculator_is_plain_shareable_data() {
    fn assert_shareable<T: Copy + Send + Sync>() {}
    assert_shareable::<SpaCalculator>();

    let calculator = nrel_calculator();
    let copy = calculator;
    assert_eq!(copy.calculate(FunctionCode::All), calculator.calculate(FunctionCode::All));
}

#[test]
fn twilight_events_are_ordered() {
    let time = TimeInstant::new(2024, 3, 20, 12, 0, 0.0, -4.0).with_delta_t(69.0);
    let calculator = SpaCalculator::standard(time, Location::new(40.1, -74.2, 0.0)).unwrap();

    let rising = |horizon| calculator.rise_transit_set(horizon).sunrise.hours().unwrap();
    let setting = |horizon| calculator.rise_transit_set(horizon).sunset.hours().unwrap();

    assert!(rising(Horizon::AstronomicalTwilight) < rising(Horizon::NauticalTwilight));
    assert!(rising(Horizon::NauticalTwilight) < rising(Horizon::CivilTwilight));
    assert!(rising(Horizon::CivilTwilight) < rising(Horizon::SunriseSunset));

    assert!(setting(Horizon::SunriseSunset) < setting(Horizon::CivilTwilight));
    assert!(setting(Horizon::CivilTwilight) < setting(Horizon::NauticalTwilight));
    assert!(setting(Horizon::NauticalTwilight) < setting(Horizon::AstronomicalTwilight));

    let custom = calculator.rise_transit_set(Horizon::Custom(-6.0));
    assert_eq!(custom, calculator.rise_transit_set(Horizon::CivilTwilight));
}

#[test]
fn instant_from_chrono_with_estimated_delta_t() {
    let offset = FixedOffset::west_opt(7 * 3600).unwrap();
    let datetime = offset.with_ymd_and_hms(2003, 10, 17, 12, 30, 30).unwrap();
    let time = TimeInstant::from_datetime(&datetime, 0.0, 0.0).with_estimated_delta_t();
    assert_eq!(time.timezone, -7.0);
    assert_close(time.delta_t, delta_t::estimate_from_date_like(&datetime), 1e-12, "delta t");

    let output = SpaCalculator::new(time, nrel_location(), nrel_atmosphere(), nrel_surface())
        .unwrap()
        .calculate(FunctionCode::Za);
    // ΔT estimate is within a couple of seconds of the measured 67 s.
    assert_close(output.zenith, 50.11162, 1e-3, "zenith");
}

#[test]
fn estimated_delta_t_before_year_270_is_rejected() {
    let time = TimeInstant::new(100, 6, 1, 12, 0, 0.0, 0.0).with_estimated_delta_t();
    assert!(time.delta_t > 8000.0);
    assert_eq!(
        SpaCalculator::standard(time, Location::new(0.0, 0.0, 0.0)).unwrap_err(),
        SpaError::DeltaTOutOfRange
    );
}

#[cfg(feature = "serde")]
#[test]
fn inputs_and_reports_round_trip_through_json() {
    let json = serde_json::to_string(&nrel_time()).unwrap();
    assert_eq!(serde_json::from_str::<TimeInstant>(&json).unwrap(), nrel_time());

    let atmosphere: Atmosphere = serde_json::from_str(r#"{"pressure": 820.0, "temperature": 11.0, "atmos_refract": 0.5667}"#).unwrap();
    assert_eq!(atmosphere, nrel_atmosphere());

    let output = nrel_calculator().calculate(FunctionCode::All);
    let value = serde_json::to_value(output).unwrap();
    assert!(value["rise_transit_set"]["sunrise"]["Occurs"].is_f64());

    let report = SpaReport::from(&output);
    let back: SpaReport = serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
    assert_eq!(back.error_code, 0);
    assert_close(back.zenith, report.zenith, 1e-12, "zenith");
    assert_close(back.sunset, report.sunset, 1e-12, "sunset");
}

fn any_utc_datetime() -> impl Strategy<Value = DateTime<Utc>> {
    (1900i32..=2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_filter_map(
        "valid datetime",
        |(year, month, day, hour, minute, second)| Utc.with_ymd_and_hms(year, month, day, hour, minute, second).single(),
    )
}

fn same_bits(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits()
}

fn observe(datetime: &DateTime<Utc>, location: Location, surface: Surface, function_code: FunctionCode) -> SpaOutput {
    let time = TimeInstant::from_datetime(datetime, 0.0, 69.0);
    compute(&time, &location, &Atmosphere::default(), &surface, function_code).unwrap()
}

proptest! {
    #[test]
    fn azimuths_differ_by_half_turn(
        datetime in any_utc_datetime(),
        latitude in -90.0_f64..=90.0,
        longitude in -180.0_f64..=180.0,
        elevation in -400.0_f64..=5000.0,
    ) {
        let output = observe(&datetime, Location::new(latitude, longitude, elevation), Surface::default(), FunctionCode::Za);
        prop_assert!((0.0..360.0).contains(&output.azimuth));
        prop_assert!((0.0..360.0).contains(&output.azimuth_astro));
        let turn = (output.azimuth - output.azimuth_astro - 180.0).rem_euclid(360.0);
        prop_assert!(turn < 1e-9 || 360.0 - turn < 1e-9, "azimuth {} astro {}", output.azimuth, output.azimuth_astro);
        prop_assert!((0.0..=180.0).contains(&output.zenith));
    }

    #[test]
    fn function_codes_agree_on_shared_fields(
        datetime in any_utc_datetime(),
        latitude in -89.0_f64..=89.0,
        longitude in -180.0_f64..=180.0,
        slope in -90.0_f64..=90.0,
        azm_rotation in -180.0_f64..=180.0,
    ) {
        let location = Location::new(latitude, longitude, 0.0);
        let surface = Surface::new(slope, azm_rotation);
        let za = observe(&datetime, location, surface, FunctionCode::Za);
        let inc = observe(&datetime, location, surface, FunctionCode::ZaInc);
        let rts = observe(&datetime, location, surface, FunctionCode::ZaRts);
        let all = observe(&datetime, location, surface, FunctionCode::All);

        for other in [&inc, &rts, &all] {
            prop_assert!(same_bits(za.zenith, other.zenith));
            prop_assert!(same_bits(za.azimuth, other.azimuth));
            prop_assert!(same_bits(za.azimuth_astro, other.azimuth_astro));
            prop_assert!(same_bits(za.equation_of_time, other.equation_of_time));
        }
        prop_assert!(za.incidence.is_none() && rts.incidence.is_none());
        prop_assert!(same_bits(inc.incidence.unwrap(), all.incidence.unwrap()));
        prop_assert!(za.rise_transit_set.is_none() && inc.rise_transit_set.is_none());

        let (a, b) = (rts.rise_transit_set.unwrap(), all.rise_transit_set.unwrap());
        prop_assert!(same_bits(a.transit, b.transit));
        prop_assert!(same_bits(a.transit_altitude, b.transit_altitude));
        prop_assert_eq!(a.sunrise.hours().map(f64::to_bits), b.sunrise.hours().map(f64::to_bits));
        prop_assert_eq!(a.sunset.hours().map(f64::to_bits), b.sunset.hours().map(f64::to_bits));
    }

    #[test]
    fn repeated_calls_are_identical(
        datetime in any_utc_datetime(),
        latitude in -90.0_f64..=90.0,
        longitude in -180.0_f64..=180.0,
        slope in -90.0_f64..=90.0,
    ) {
        let location = Location::new(latitude, longitude, 100.0);
        let surface = Surface::new(slope, 0.0);
        let first = SpaReport::from(&observe(&datetime, location, surface, FunctionCode::All));
        let second = SpaReport::from(&observe(&datetime, location, surface, FunctionCode::All));
        for (a, b) in [
            (first.zenith, second.zenith),
            (first.azimuth, second.azimuth),
            (first.incidence, second.incidence),
            (first.sunrise, second.sunrise),
            (first.sunset, second.sunset),
            (first.suntransit, second.suntransit),
            (first.sun_transit_alt, second.sun_transit_alt),
            (first.eot, second.eot),
        ] {
            prop_assert!(same_bits(a, b));
        }
    }

    #[test]
    fn rise_transit_set_ignores_time_of_day(
        datetime in any_utc_datetime(),
        latitude in -60.0_f64..=60.0,
        longitude in -180.0_f64..=180.0,
    ) {
        let location = Location::new(latitude, longitude, 0.0);
        let morning = TimeInstant::new(
            chrono::Datelike::year(&datetime),
            chrono::Datelike::month(&datetime) as i32,
            chrono::Datelike::day(&datetime) as i32,
            0, 0, 0.0, 0.0,
        ).with_delta_t(69.0);
        let evening = TimeInstant { hour: 23, minute: 59, second: 59.0, ..morning };
        let a = SpaCalculator::standard(morning, location).unwrap().rise_transit_set(Horizon::SunriseSunset);
        let b = SpaCalculator::standard(evening, location).unwrap().rise_transit_set(Horizon::SunriseSunset);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn equation_of_time_is_bounded(datetime in any_utc_datetime()) {
        let output = observe(&datetime, Location::new(0.0, 0.0, 0.0), Surface::default(), FunctionCode::Za);
        prop_assert!((-17.0..=17.0).contains(&output.equation_of_time), "eot {}", output.equation_of_time);
    }
}
