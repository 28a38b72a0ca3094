//! Day-to-day continuity of rise, transit and set.
//!
//! Solar events drift by at most a few minutes per day outside the polar
//! regions, so a large jump between consecutive days points at a wrapping or
//! interpolation error.

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;

use crate::{Horizon, Location, SolarEvent, SpaCalculator, TimeInstant};

fn hours_apart(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(24.0);
    diff.min(24.0 - diff)
}

fn instant_on(date: NaiveDate, timezone: f64) -> TimeInstant {
    TimeInstant::new(date.year(), date.month() as i32, date.day() as i32, 12, 0, 0.0, timezone).with_delta_t(69.0)
}

proptest! {
    #[test]
    fn transit_changes_smoothly_over_consecutive_days(
        days_from_epoch in -36_500i64..=36_500,
        latitude in -89.0_f64..=89.0,
        longitude in -180.0_f64..=180.0,
        elevation in 0.0_f64..=3000.0,
    ) {
        let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + chrono::Duration::days(days_from_epoch);
        let timezone = (longitude / 15.0).round();
        let location = Location::new(latitude, longitude, elevation);

        let mut previous: Option<f64> = None;
        for offset in 0..10 {
            let date = start.checked_add_days(Days::new(offset)).unwrap();
            let rts = SpaCalculator::standard(instant_on(date, timezone), location)
                .unwrap()
                .rise_transit_set(Horizon::SunriseSunset);

            if let Some(previous) = previous {
                let jump = hours_apart(rts.transit, previous);
                prop_assert!(jump < 60.0 / 3600.0, "transit jumped {jump} h on {date}: {previous} -> {}", rts.transit);
            }
            previous = Some(rts.transit);
        }
    }

    #[test]
    fn sunrise_and_sunset_change_smoothly_over_consecutive_days(
        days_from_epoch in -36_500i64..=36_500,
        latitude in -65.0_f64..=65.0,
        longitude in -180.0_f64..=180.0,
    ) {
        let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + chrono::Duration::days(days_from_epoch);
        let timezone = (longitude / 15.0).round();
        let location = Location::new(latitude, longitude, 0.0);
        // Near the polar circles day length changes quickly.
        let max_jump_hours = if latitude.abs() > 60.0 { 0.5 } else { 5.0 / 60.0 };

        let mut previous: Option<(SolarEvent, SolarEvent)> = None;
        for offset in 0..10 {
            let date = start.checked_add_days(Days::new(offset)).unwrap();
            let rts = SpaCalculator::standard(instant_on(date, timezone), location)
                .unwrap()
                .rise_transit_set(Horizon::SunriseSunset);

            if let Some((previous_rise, previous_set)) = previous {
                for (before, after) in [(previous_rise, rts.sunrise), (previous_set, rts.sunset)] {
                    if let (Some(before), Some(after)) = (before.hours(), after.hours()) {
                        let jump = hours_apart(before, after);
                        prop_assert!(jump < max_jump_hours, "event jumped {jump} h on {date}: {before} -> {after}");
                    }
                }
            }
            previous = Some((rts.sunrise, rts.sunset));
        }
    }
}
