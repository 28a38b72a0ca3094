//! # ΔT (TT − UT) estimate
//!
//! Piecewise polynomial model of Espenak & Meeus (NASA Five Millennium Canon
//! of Solar Eclipses, 2006), evaluated at the decimal year
//! `year + (month - 0.5) / 12`. Outside -500…2150 the long-term parabola of
//! Morrison & Stephenson (2004) applies.
//!
//! Use it when no measured ΔT is at hand. Accuracy is a few seconds for the
//! 20th century and degrades to hours for antiquity. Before roughly year 270
//! the estimate exceeds the ±8000 s that the calculator accepts.

use chrono::Datelike;

use crate::math::polynomial;

/// One polynomial piece, valid for `year < end_year`.
struct Segment {
    end_year: f64,
    origin: f64,
    scale: f64,
    coeffs: &'static [f64],
}

const SEGMENTS: [Segment; 12] = [
    Segment {
        end_year: 500.0,
        origin: 0.0,
        scale: 100.0,
        coeffs: &[10583.6, -1014.41, 33.78311, -5.952053, -0.1798452, 0.022174192, 0.0090316521],
    },
    Segment {
        end_year: 1600.0,
        origin: 1000.0,
        scale: 100.0,
        coeffs: &[1574.2, -556.01, 71.23472, 0.319781, -0.8503463, -0.005050998, 0.0083572073],
    },
    Segment {
        end_year: 1700.0,
        origin: 1600.0,
        scale: 1.0,
        coeffs: &[120.0, -0.9808, -0.01532, 1.0 / 7129.0],
    },
    Segment {
        end_year: 1800.0,
        origin: 1700.0,
        scale: 1.0,
        coeffs: &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
    },
    Segment {
        end_year: 1860.0,
        origin: 1800.0,
        scale: 1.0,
        coeffs: &[
            13.72,
            -0.332447,
            0.0068612,
            0.0041116,
            -0.00037436,
            0.0000121272,
            -0.0000001699,
            0.000000000875,
        ],
    },
    Segment {
        end_year: 1900.0,
        origin: 1860.0,
        scale: 1.0,
        coeffs: &[7.62, 0.5737, -0.251754, 0.01680668, -0.0004473624, 1.0 / 233_174.0],
    },
    Segment {
        end_year: 1920.0,
        origin: 1900.0,
        scale: 1.0,
        coeffs: &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197],
    },
    Segment {
        end_year: 1941.0,
        origin: 1920.0,
        scale: 1.0,
        coeffs: &[21.20, 0.84493, -0.076100, 0.0020936],
    },
    Segment {
        end_year: 1961.0,
        origin: 1950.0,
        scale: 1.0,
        coeffs: &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0],
    },
    Segment {
        end_year: 1986.0,
        origin: 1975.0,
        scale: 1.0,
        coeffs: &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0],
    },
    Segment {
        end_year: 2005.0,
        origin: 2000.0,
        scale: 1.0,
        coeffs: &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599],
    },
    Segment {
        end_year: 2050.0,
        origin: 2000.0,
        scale: 1.0,
        coeffs: &[62.92, 0.32217, 0.005589],
    },
];

const POLYNOMIAL_START_YEAR: f64 = -500.0;
const LONG_TERM_BLEND_END_YEAR: f64 = 2150.0;

/// Morrison & Stephenson long-term parabola.
fn long_term(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT in seconds for a decimal year.
pub fn estimate_for_decimal_year(year: f64) -> f64 {
    if year < POLYNOMIAL_START_YEAR {
        return long_term(year);
    }
    if let Some(segment) = SEGMENTS.iter().find(|segment| year < segment.end_year) {
        return polynomial(segment.coeffs, (year - segment.origin) / segment.scale);
    }
    if year < LONG_TERM_BLEND_END_YEAR {
        return long_term(year) - 0.5628 * (LONG_TERM_BLEND_END_YEAR - year);
    }
    long_term(year)
}

/// ΔT in seconds for the middle of the given month.
pub fn estimate(year: i32, month: i32) -> f64 {
    estimate_for_decimal_year(f64::from(year) + (f64::from(month) - 0.5) / 12.0)
}

/// ΔT in seconds for anything with a calendar date.
///
/// ```
/// use chrono::NaiveDate;
/// use spa_engine::delta_t;
///
/// let date = NaiveDate::from_ymd_opt(2003, 10, 17).unwrap();
/// let delta_t = delta_t::estimate_from_date_like(&date);
/// assert!((60.0..70.0).contains(&delta_t));
/// ```
pub fn estimate_from_date_like<D: Datelike>(date: &D) -> f64 {
    estimate(date.year(), date.month() as i32)
}
