//! Periodic-term evaluators shared by the heliocentric and nutation series.
//!
//! Summation order is fixed: rows are folded in table order starting at row 0,
//! and power groups are accumulated in ascending power of τ. Results are
//! therefore reproducible bit-for-bit across calls and platforms that use the
//! same float library.

#[allow(unused_imports)]
use core_maths::CoreFloat;

/// One row `A·cos(B + C·τ)` of a periodic-term table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct PeriodicTerm {
    pub(crate) amplitude: f64,
    pub(crate) phase: f64,
    pub(crate) frequency: f64,
}

impl PeriodicTerm {
    pub(crate) const fn new(amplitude: f64, phase: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            phase,
            frequency,
        }
    }

    fn evaluate(&self, tau: f64) -> f64 {
        self.amplitude * (self.phase + self.frequency * tau).cos()
    }
}

/// Scale of the VSOP87 amplitudes (10⁸).
const SERIES_SCALE: f64 = 1.0e8;

/// Sums one table of periodic terms at `tau`.
pub(crate) fn sum_periodic_terms(terms: &[PeriodicTerm], tau: f64) -> f64 {
    terms.iter().fold(0.0, |accumulator, term| accumulator + term.evaluate(tau))
}

/// Evaluates a full series: `Σ_k (Σ terms_k)·τᵏ / 10⁸`.
///
/// `groups[k]` holds the table multiplied by `τᵏ`.
pub(crate) fn evaluate_series(groups: &[&[PeriodicTerm]], tau: f64) -> f64 {
    let mut power = 1.0;
    let mut sum = 0.0;
    for terms in groups {
        sum += sum_periodic_terms(terms, tau) * power;
        power *= tau;
    }
    sum / SERIES_SCALE
}

/// Sums an argument-combination table, the form the nutation series uses.
///
/// Row `i` has the argument `θᵢ = Σⱼ multipliers[i][j]·arguments[j]` in
/// degrees and contributes `(a + b·t)·sin θᵢ` to the first sum and
/// `(c + d·t)·cos θᵢ` to the second, with `[a, b, c, d] = coefficients[i]`.
pub(crate) fn sum_argument_series<const N: usize>(
    multipliers: &[[i8; N]],
    coefficients: &[[f64; 4]],
    arguments: &[f64; N],
    t: f64,
) -> (f64, f64) {
    let mut sum_sin = 0.0;
    let mut sum_cos = 0.0;

    for (row, [a, b, c, d]) in multipliers.iter().zip(coefficients.iter()) {
        let argument = row
            .iter()
            .zip(arguments.iter())
            .fold(0.0, |accumulator, (&multiplier, &value)| {
                accumulator + f64::from(multiplier) * value
            })
            .to_radians();

        sum_sin += (a + t * b) * argument.sin();
        sum_cos += (c + t * d) * argument.cos();
    }

    (sum_sin, sum_cos)
}
